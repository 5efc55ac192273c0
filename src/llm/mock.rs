//! Deterministic in-memory generation backend for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::GenerationBackend;
use super::error::GenerationError;

/// Mock backend with switchable availability and failure modes.
///
/// Tracks how many generation calls were made so tests can assert that the
/// cascade was (or was not) taken.
#[derive(Debug)]
pub struct MockGenerationClient {
    available: AtomicBool,
    failing: AtomicBool,
    calls: AtomicU32,
}

impl MockGenerationClient {
    /// Creates an available, succeeding mock.
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            failing: AtomicBool::new(false),
            calls: AtomicU32::new(0),
        }
    }

    /// Creates a mock whose availability probe reports `false`.
    pub fn unavailable() -> Self {
        let mock = Self::new();
        mock.available.store(false, Ordering::SeqCst);
        mock
    }

    /// Creates a mock whose generation calls always fail.
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.failing.store(true, Ordering::SeqCst);
        mock
    }

    /// Number of generation calls made so far (retries included).
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Switches the failure mode at runtime.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationClient {
    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(format!("Mock response for: {}", prompt))
    }
}
