pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Room for multipart boundaries and the job description on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 256 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Upload-based analysis
        .route("/api/analyzeResume", post(resume::handle_analyze_resume))
        .route("/api/atsCheck", post(resume::handle_ats_check))
        .route("/api/matchJob", post(resume::handle_match_job))
        // Mock interview
        .route(
            "/api/generateQuestions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/evaluateAnswers",
            post(interview::handle_evaluate_answers),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
