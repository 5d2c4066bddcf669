//! Axum route handlers for the upload-based features.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::info;

use crate::contract::request_reply;
use crate::errors::AppError;
use crate::resume::models::{AnalyzeResumeResponse, AtsReport, JobMatch, ResumeAnalysis};
use crate::resume::prompts::{analyze_prompt, ats_prompt, job_match_prompt};
use crate::resume::resume_text;
use crate::resume::upload::UploadForm;
use crate::state::AppState;

/// POST /api/analyzeResume
///
/// Multipart `file` (PDF or DOCX). Scores the résumé against general best practices.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let file = form.take_file(state.config.max_upload_bytes)?;
    let text = resume_text(&file).await?;

    info!(file = %file.file_name, "Running resume analysis");
    let analysis: ResumeAnalysis = request_reply(
        state.llm.as_ref(),
        &analyze_prompt(&text),
        "Server error during analysis",
    )
    .await?;

    Ok(Json(AnalyzeResumeResponse {
        success: true,
        analysis,
    }))
}

/// POST /api/atsCheck
///
/// Multipart `file`. Returns an ATS compatibility report.
pub async fn handle_ats_check(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AtsReport>, AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let file = form.take_file(state.config.max_upload_bytes)?;
    let text = resume_text(&file).await?;

    info!(file = %file.file_name, "Running ATS check");
    let report = request_reply(
        state.llm.as_ref(),
        &ats_prompt(&text),
        "Failed to check ATS compatibility. Please try again.",
    )
    .await?;

    Ok(Json(report))
}

/// POST /api/matchJob
///
/// Multipart `file` + `jobDescription`. Compares the résumé against the job description.
pub async fn handle_match_job(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<JobMatch>, AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let job_description = form
        .job_description()
        .map(str::to_string)
        .ok_or_else(|| AppError::validation("File and job description are required"))?;
    let file = form.take_file(state.config.max_upload_bytes)?;
    let text = resume_text(&file).await?;

    info!(
        file = %file.file_name,
        jd_chars = job_description.chars().count(),
        "Running job match"
    );
    let job_match = request_reply(
        state.llm.as_ref(),
        &job_match_prompt(&text, &job_description),
        "Failed to analyze job match. Please try again.",
    )
    .await?;

    Ok(Json(job_match))
}
