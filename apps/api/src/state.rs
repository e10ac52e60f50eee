use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{CompletionService, LlmError};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no credential is configured; requests then fail with a config error.
    pub completion: Option<Arc<dyn CompletionService>>,
}

impl AppState {
    pub fn completion(&self) -> Result<&dyn CompletionService, LlmError> {
        self.completion.as_deref().ok_or(LlmError::MissingCredential)
    }
}
