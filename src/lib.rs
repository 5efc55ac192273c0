//! Kindred library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`SimilarityMetric`] - The closed metric enumeration
//! - [`ScoreCache`], [`ScoreCacheHandle`] - Score cache infrastructure
//! - [`SimilarityEngine`], [`Calculation`], [`ScoreOutcome`] - Dispatch
//!
//! ## Strategies & Embedding
//! - [`similarity::lexical::jaccard`], [`similarity::vector::tfidf_cosine`]
//! - [`SemanticScorer`] - Embedding strategy with vector-space fallback
//! - [`PromptEncoder`], [`EncoderConfig`] - Sentence encoder
//!
//! ## Orchestration
//! - [`TextSanitizer`] - Input scrubbing
//! - [`GenerationBackend`], [`OllamaClient`] - Generation cascade
//! - [`gateway`] - Axum router, handlers, payloads
//!
//! ## Test/Mock Support
//! - [`MockGenerationClient`] behind `#[cfg(any(test, feature = "mock"))]`

pub mod cache;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod hashing;
pub mod llm;
pub mod metric;
pub mod sanitize;
pub mod similarity;

pub use cache::{ScoreCache, ScoreCacheHandle};
pub use config::{Config, ConfigError};
pub use embedding::{EmbeddingError, EncoderConfig, PromptEncoder};
pub use gateway::{HandlerState, KINDRED_STATUS_HEADER, create_router_with_state};
pub use hashing::{hash_text, pair_key};
pub use llm::{GenerationBackend, GenerationConfig, GenerationError, OllamaClient};
#[cfg(any(test, feature = "mock"))]
pub use llm::MockGenerationClient;
pub use metric::SimilarityMetric;
pub use sanitize::TextSanitizer;
pub use similarity::{
    Calculation, DegradeReason, ScoreOutcome, SemanticScorer, SimilarityEngine,
};
