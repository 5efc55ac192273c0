//! Sentence embedding generation for the semantic similarity strategy.
//!
//! Use [`EncoderConfig::stub`] for tests without model files. A failed load
//! at service start is not fatal: the caller keeps `None` and the semantic
//! strategy degrades to vector-space scoring.

/// Encoder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// BERT sentence encoder.
pub mod encoder;
mod error;

pub use config::EncoderConfig;
pub use device::select_device;
pub use encoder::PromptEncoder;
pub use error::EmbeddingError;
