//! Shared service constants.

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "kindred";

/// Embedding dimension produced by the deterministic stub encoder.
pub const STUB_EMBEDDING_DIM: usize = 384;

/// Default max tokens considered per prompt by the encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default max entries held by the in-memory score cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
