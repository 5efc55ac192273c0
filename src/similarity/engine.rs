//! Metric dispatch with cache-around semantics.

use tracing::debug;

use crate::cache::ScoreCacheHandle;
use crate::metric::SimilarityMetric;

use super::lexical::jaccard;
use super::semantic::SemanticScorer;
use super::types::{Calculation, DegradeReason, ScoreOutcome};
use super::vector::tfidf_cosine;

/// Dispatches similarity requests to the strategy for the requested metric,
/// consulting and populating the score cache around each call.
pub struct SimilarityEngine {
    cache: ScoreCacheHandle,
    semantic: SemanticScorer,
}

impl std::fmt::Debug for SimilarityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityEngine")
            .field("cache", &self.cache)
            .field("semantic", &self.semantic)
            .finish()
    }
}

impl SimilarityEngine {
    /// Creates an engine around a shared cache and a (possibly degraded)
    /// semantic scorer.
    pub fn new(cache: ScoreCacheHandle, semantic: SemanticScorer) -> Self {
        Self { cache, semantic }
    }

    /// Scores `text1` against `text2` under `metric`.
    ///
    /// Cache hits return immediately. On a miss the strategy runs and the
    /// score is stored under the requested metric — including scores the
    /// semantic strategy derived via its vector-space fallback, so semantic
    /// lookups keep hitting the cache while the model stays unavailable.
    /// Degraded-to-zero results are failure defaults and stay uncached.
    pub fn calculate(&self, text1: &str, text2: &str, metric: SimilarityMetric) -> Calculation {
        if let Some(score) = self.cache.get(metric, text1, text2) {
            debug!(%metric, score, "score cache hit");
            return Calculation {
                outcome: ScoreOutcome::Scored(score),
                cache_hit: true,
            };
        }

        let outcome = match metric {
            SimilarityMetric::Lexical => ScoreOutcome::Scored(jaccard(text1, text2)),
            SimilarityMetric::VectorSpace => tfidf_cosine(text1, text2),
            SimilarityMetric::EmbeddingSpace => self.semantic.score(text1, text2),
        };

        let zero_default = matches!(
            outcome,
            ScoreOutcome::Degraded {
                reason: DegradeReason::EmptyVocabulary,
                ..
            }
        );
        if !zero_default {
            self.cache.insert(metric, text1, text2, outcome.score());
        }

        debug!(
            %metric,
            score = outcome.score(),
            degraded = outcome.is_degraded(),
            "score computed"
        );

        Calculation {
            outcome,
            cache_hit: false,
        }
    }

    /// The shared score cache.
    pub fn cache(&self) -> &ScoreCacheHandle {
        &self.cache
    }

    /// Encoder state for health reporting.
    pub fn encoder_mode(&self) -> &'static str {
        self.semantic.encoder_mode()
    }
}
