//! Embedding-space similarity with graceful degradation.
//!
//! The scorer owns an optional encoder handle. Absence is a valid state, not
//! an error: every call simply redirects to the vector-space strategy and
//! reports the redirect in the outcome.

use std::sync::Arc;

use tracing::warn;

use crate::embedding::PromptEncoder;

use super::types::{DegradeReason, ScoreOutcome};
use super::vector::{cosine_similarity, tfidf_cosine};

/// Scores semantic similarity when an encoder is available, falling back to
/// TF-IDF cosine when it is not.
pub struct SemanticScorer {
    encoder: Option<Arc<PromptEncoder>>,
}

impl std::fmt::Debug for SemanticScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScorer")
            .field("encoder_mode", &self.encoder_mode())
            .finish()
    }
}

impl SemanticScorer {
    /// Creates a scorer around an optionally-loaded encoder.
    ///
    /// Pass `None` when model loading failed at startup; the scorer stays
    /// usable and degrades every call to the vector-space strategy.
    pub fn new(encoder: Option<Arc<PromptEncoder>>) -> Self {
        Self { encoder }
    }

    /// Creates a scorer with no encoder (always falls back).
    pub fn absent() -> Self {
        Self { encoder: None }
    }

    /// Returns `true` if an encoder handle is present.
    #[inline]
    pub fn has_encoder(&self) -> bool {
        self.encoder.is_some()
    }

    /// Reports the encoder state for health reporting.
    pub fn encoder_mode(&self) -> &'static str {
        match &self.encoder {
            Some(encoder) if encoder.is_stub() => "stub",
            Some(_) => "real",
            None => "absent",
        }
    }

    /// Scores the pair in embedding space, or via the vector-space fallback.
    ///
    /// The fallback delegates exactly: a degraded outcome carries the same
    /// score [`tfidf_cosine`] would return for the pair.
    pub fn score(&self, text1: &str, text2: &str) -> ScoreOutcome {
        let Some(encoder) = &self.encoder else {
            warn!("embedding model unavailable, redirecting to vector-space");
            return Self::fall_back(text1, text2, DegradeReason::ModelUnavailable);
        };

        let embeddings = encoder
            .embed(text1)
            .and_then(|first| encoder.embed(text2).map(|second| (first, second)));

        match embeddings {
            Ok((first, second)) => {
                let raw = cosine_similarity(&first, &second);
                ScoreOutcome::Scored(raw.clamp(0.0, 1.0))
            }
            Err(error) => {
                warn!(%error, "embedding encode failed, redirecting to vector-space");
                Self::fall_back(text1, text2, DegradeReason::EncodeFailed)
            }
        }
    }

    fn fall_back(text1: &str, text2: &str, reason: DegradeReason) -> ScoreOutcome {
        ScoreOutcome::Degraded {
            score: tfidf_cosine(text1, text2).score(),
            reason,
        }
    }
}
