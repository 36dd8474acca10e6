use std::sync::Arc;

use crate::config::Config;
use crate::parsing::ner::EntityRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Entity recognizer chosen at startup. Read-only, shared by all requests.
    pub recognizer: Arc<dyn EntityRecognizer>,
}
