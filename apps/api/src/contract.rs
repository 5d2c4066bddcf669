//! Reply Contract: the checks every model reply must pass before it reaches the browser.
//!
//! Serde already enforces the shape (every field present, every type right).
//! `ReplyContract::validate` adds the value rules serde cannot express:
//! - every score is a finite number in 0..=100
//! - lists the UI cannot render empty (e.g. interview questions) are non-empty
//!
//! A reply that fails either check is an upstream failure, reported like a parse error.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::dashboard::Scorecard;
use crate::errors::AppError;
use crate::llm_client::{call_json, prompts::JSON_ONLY_SYSTEM, LlmProvider};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractViolation {
    #[error("`{field}` is {value}, expected a score between 0 and 100")]
    ScoreOutOfRange { field: &'static str, value: f64 },

    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },
}

/// Value-level validation for a deserialized model reply.
pub trait ReplyContract {
    fn validate(&self) -> Result<(), ContractViolation>;
}

pub fn check_score(field: &'static str, value: f64) -> Result<(), ContractViolation> {
    if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(ContractViolation::ScoreOutOfRange { field, value })
    }
}

pub fn check_non_empty<T>(field: &'static str, items: &[T]) -> Result<(), ContractViolation> {
    if items.is_empty() {
        Err(ContractViolation::Empty { field })
    } else {
        Ok(())
    }
}

/// Sends `prompt`, then parses and validates the reply as `T`.
/// Any failure becomes `AppError::Llm` carrying `failure_message` for the user.
pub async fn request_reply<T>(
    llm: &dyn LlmProvider,
    prompt: &str,
    failure_message: &str,
) -> Result<T, AppError>
where
    T: DeserializeOwned + ReplyContract + Scorecard,
{
    let reply: T = call_json(llm, prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::llm(failure_message, e))?;

    reply.validate().map_err(|violation| {
        AppError::llm(
            failure_message,
            format!("AI response did not match expected format: {violation}"),
        )
    })?;

    match reply.headline() {
        Some(card) => info!(
            label = card.label,
            score = card.score,
            tier = ?card.tier,
            "Model reply accepted"
        ),
        None => info!("Model reply accepted"),
    }
    Ok(reply)
}
