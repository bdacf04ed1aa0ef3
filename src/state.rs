//! Shared application state.

use std::sync::Arc;

use crate::upstream::AnswerService;

/// Cloned into every handler by axum.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn AnswerService>,
    pub default_cultura: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Arc<dyn AnswerService>, default_cultura: Option<String>) -> Self {
        Self { upstream, default_cultura }
    }
}
