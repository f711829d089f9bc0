use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: the Gemini `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
}
