use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::questions::generator::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable question source. Default: LLM with fallback. Swap via QUESTION_BACKEND.
    pub question_generator: Arc<dyn QuestionGenerator>,
}
