//! Text-generation backend for the similarity cascade.
//!
//! The gateway invokes generation only when a pair scores above the caller's
//! threshold; generation failures never fail the request (the handler
//! substitutes a placeholder). [`MockGenerationClient`] is available behind
//! the `mock` feature for tests.

pub mod client;
mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::{GenerationConfig, OllamaClient};
pub use error::GenerationError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockGenerationClient;

use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

/// Backend capable of generating text for a prompt.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Probes whether the backend can currently serve requests.
    async fn is_available(&self) -> bool;

    /// Generates a completion for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Bounded retries with exponential backoff around [`generate`].
    ///
    /// `max_retries` counts total attempts; values below 1 are treated
    /// as 1.
    async fn generate_with_retry(
        &self,
        prompt: &str,
        max_retries: u32,
    ) -> Result<String, GenerationError> {
        let attempts = max_retries.max(1);
        let mut delay = Duration::from_millis(500);

        for attempt in 1..=attempts {
            match self.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(error) => {
                    warn!(attempt, attempts, %error, "generation attempt failed");
                }
            }

            if attempt < attempts {
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }

        Err(GenerationError::RetriesExhausted { attempts })
    }
}
