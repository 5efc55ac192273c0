//! The closed set of similarity metrics.

use serde::{Deserialize, Serialize};

/// Similarity metric selector, used as a cache-key component and dispatch
/// discriminator. The set is closed: unknown wire values are rejected at
/// deserialization and never reach the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityMetric {
    /// Jaccard index over lowercased word sets.
    #[serde(rename = "lexical")]
    Lexical,
    /// Cosine similarity between TF-IDF vectors.
    #[serde(rename = "vector-space")]
    VectorSpace,
    /// Cosine similarity between sentence embeddings.
    #[serde(rename = "embedding-space")]
    EmbeddingSpace,
}

impl SimilarityMetric {
    /// All metrics, in the order reported by `/metrics`.
    pub const ALL: [SimilarityMetric; 3] = [
        SimilarityMetric::Lexical,
        SimilarityMetric::VectorSpace,
        SimilarityMetric::EmbeddingSpace,
    ];

    /// Returns the wire name of this metric.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Lexical => "lexical",
            SimilarityMetric::VectorSpace => "vector-space",
            SimilarityMetric::EmbeddingSpace => "embedding-space",
        }
    }

    /// Human-readable description, surfaced by `/metrics`.
    pub fn description(&self) -> &'static str {
        match self {
            SimilarityMetric::Lexical => "Jaccard similarity based on word overlap",
            SimilarityMetric::VectorSpace => "Cosine similarity using TF-IDF vectors",
            SimilarityMetric::EmbeddingSpace => {
                "Semantic similarity using sentence embeddings"
            }
        }
    }
}

impl std::fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
