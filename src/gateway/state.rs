use std::sync::Arc;

use crate::llm::GenerationBackend;
use crate::sanitize::TextSanitizer;
use crate::similarity::SimilarityEngine;

/// Shared per-request state for the gateway handlers.
pub struct HandlerState<G: GenerationBackend + 'static> {
    pub engine: Arc<SimilarityEngine>,

    pub sanitizer: Arc<TextSanitizer>,

    pub generation: Arc<G>,

    pub llm_model: String,

    pub llm_retries: u32,
}

// Manual impl: deriving would require G: Clone, but only the Arc is cloned.
impl<G: GenerationBackend> Clone for HandlerState<G> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            sanitizer: Arc::clone(&self.sanitizer),
            generation: Arc::clone(&self.generation),
            llm_model: self.llm_model.clone(),
            llm_retries: self.llm_retries,
        }
    }
}

impl<G: GenerationBackend> std::fmt::Debug for HandlerState<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerState")
            .field("engine", &self.engine)
            .field("llm_model", &self.llm_model)
            .field("llm_retries", &self.llm_retries)
            .finish()
    }
}

impl<G: GenerationBackend> HandlerState<G> {
    pub fn new(
        engine: Arc<SimilarityEngine>,
        sanitizer: Arc<TextSanitizer>,
        generation: Arc<G>,
        llm_model: String,
        llm_retries: u32,
    ) -> Self {
        Self {
            engine,
            sanitizer,
            generation,
            llm_model,
            llm_retries,
        }
    }
}
