use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data: every request is independent.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model provider. Production: `GeminiClient`.
    pub llm: Arc<dyn LlmProvider>,
    pub config: Config,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmProvider>, config: Config) -> Self {
        Self { llm, config }
    }
}
