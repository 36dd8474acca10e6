//! Named-entity recognition seam used by the name extractor.
//!
//! The recognizer is built once at startup and shared read-only through
//! `AppState` as `Arc<dyn EntityRecognizer>`. Implementations must be safe
//! for concurrent read-only calls.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::info;

use crate::config::{Config, NerBackend};
use crate::llm_client::prompts::{NER_PROMPT_TEMPLATE, NER_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum NerError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("recognizer misconfigured: {0}")]
    Config(String),
}

/// One recognized span and its label ("PERSON", "ORG", ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    pub fn is_person(&self) -> bool {
        self.label.eq_ignore_ascii_case("PERSON")
    }
}

/// Finds entities in a text window, in document order.
pub trait EntityRecognizer: Send + Sync {
    fn find_entities(&self, window: &str) -> Result<Vec<Entity>, NerError>;
}

/// Person entity texts in document order. Failures surface to the caller.
pub fn find_person_entities(
    recognizer: &dyn EntityRecognizer,
    window: &str,
) -> Result<Vec<String>, NerError> {
    Ok(recognizer
        .find_entities(window)?
        .into_iter()
        .filter(Entity::is_person)
        .map(|e| e.text)
        .collect())
}

/// Recognizer with no model behind it. Always finds nothing.
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn find_entities(&self, _window: &str) -> Result<Vec<Entity>, NerError> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct EntityList {
    entities: Vec<Entity>,
}

/// Entity recognition through the LLM client.
///
/// The pipeline is synchronous, so the async call is driven on the runtime
/// captured at startup. Must be called from a blocking thread
/// (`spawn_blocking`), never from inside an async task.
pub struct LlmEntityRecognizer {
    llm: LlmClient,
    runtime: Handle,
}

impl LlmEntityRecognizer {
    pub fn new(llm: LlmClient, runtime: Handle) -> Self {
        Self { llm, runtime }
    }
}

impl EntityRecognizer for LlmEntityRecognizer {
    fn find_entities(&self, window: &str) -> Result<Vec<Entity>, NerError> {
        let prompt = NER_PROMPT_TEMPLATE.replace("{window}", window);
        let list: EntityList = self
            .runtime
            .block_on(self.llm.complete_json(&prompt, NER_SYSTEM))?;
        Ok(list.entities)
    }
}

/// Builds the recognizer selected by configuration.
/// Errors here are startup errors; nothing is re-initialised per request.
pub fn build_recognizer(
    config: &Config,
    runtime: Handle,
) -> Result<Arc<dyn EntityRecognizer>, NerError> {
    match config.ner_backend {
        NerBackend::None => {
            info!("NER backend: none (name extraction uses line heuristic only)");
            Ok(Arc::new(NoopRecognizer))
        }
        NerBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .ok_or_else(|| NerError::Config("ANTHROPIC_API_KEY is not set".to_string()))?;
            let llm = LlmClient::new(api_key)?;
            info!("NER backend: llm (model: {})", crate::llm_client::MODEL);
            Ok(Arc::new(LlmEntityRecognizer::new(llm, runtime)))
        }
    }
}
