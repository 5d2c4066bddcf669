//! Axum route handlers for the mock-interview features.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::contract::request_reply;
use crate::errors::AppError;
use crate::interview::models::{
    EvaluateAnswersRequest, GenerateQuestionsRequest, InterviewEvaluation, InterviewQuestions,
};
use crate::interview::prompts::{evaluation_prompt, questions_prompt};
use crate::state::AppState;

/// POST /api/generateQuestions
///
/// `{jobRole}` → `{questions: [...]}`.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<InterviewQuestions>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let job_role = non_blank(request.job_role.as_deref())
        .ok_or_else(|| AppError::validation("Job role is required"))?;

    info!(%job_role, "Generating interview questions");
    let questions = request_reply(
        state.llm.as_ref(),
        &questions_prompt(job_role),
        "Failed to generate questions. Please try again.",
    )
    .await?;

    Ok(Json(questions))
}

/// POST /api/evaluateAnswers
///
/// `{jobRole, questions, answers}` → evaluation. The two arrays must have equal length;
/// mismatches are rejected before the model is called.
pub async fn handle_evaluate_answers(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateAnswersRequest>, JsonRejection>,
) -> Result<Json<InterviewEvaluation>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;

    let (job_role, questions, answers) = match (
        non_blank(request.job_role.as_deref()),
        request.questions,
        request.answers,
    ) {
        (Some(job_role), Some(questions), Some(answers)) => (job_role.to_string(), questions, answers),
        _ => {
            return Err(AppError::validation(
                "Job role, questions, and answers are required",
            ))
        }
    };

    if questions.len() != answers.len() {
        return Err(AppError::validation(
            "Number of questions and answers must match",
        ));
    }
    if questions.is_empty() {
        return Err(AppError::validation("At least one question is required"));
    }

    info!(%job_role, pairs = questions.len(), "Evaluating interview answers");
    let evaluation = request_reply(
        state.llm.as_ref(),
        &evaluation_prompt(&job_role, &questions, &answers),
        "Failed to evaluate answers. Please try again.",
    )
    .await?;

    Ok(Json(evaluation))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::validation(format!("Invalid JSON body: {}", rejection.body_text()))
}
