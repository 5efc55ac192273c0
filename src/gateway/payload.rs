//! Request/response payloads for the similarity gateway.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::metric::SimilarityMetric;

use super::error::GatewayError;

/// Default similarity threshold when the caller omits one.
pub const DEFAULT_THRESHOLD: f32 = 0.7;

/// Placeholder substituted when generation fails or returns nothing.
pub const GENERATION_PLACEHOLDER: &str =
    "LLM service unavailable or failed to generate response";

#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityRequest {
    /// First text prompt.
    pub prompt1: String,
    /// Second text prompt.
    pub prompt2: String,
    /// Similarity metric to use.
    #[serde(default = "default_metric")]
    pub similarity_metric: SimilarityMetric,
    /// Minimum similarity score to trigger the generation call.
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f32,
    /// Whether to invoke generation when the pair is similar enough.
    #[serde(default)]
    pub use_llm: bool,
}

fn default_metric() -> SimilarityMetric {
    SimilarityMetric::VectorSpace
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

impl SimilarityRequest {
    /// Boundary validation; the dispatcher never sees invalid input.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.prompt1.trim().is_empty() || self.prompt2.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "prompts cannot be empty or whitespace only".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(GatewayError::InvalidRequest(format!(
                "similarity_threshold must be within [0.0, 1.0], got {}",
                self.similarity_threshold
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResponse {
    /// Whether the score met the caller's threshold.
    pub are_similar: bool,
    /// Metric used for the calculation.
    pub similarity_metric: SimilarityMetric,
    /// Calculated similarity score.
    pub similarity_score: f32,
    /// Generated text, present only when the cascade ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_response: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub llm_available: bool,
    pub llm_model: String,
    pub embedder_mode: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub available_metrics: Vec<&'static str>,
    pub descriptions: BTreeMap<&'static str, &'static str>,
}

impl MetricsResponse {
    /// Enumerates the closed metric set.
    pub fn current() -> Self {
        Self {
            available_metrics: SimilarityMetric::ALL.iter().map(|m| m.as_str()).collect(),
            descriptions: SimilarityMetric::ALL
                .iter()
                .map(|m| (m.as_str(), m.description()))
                .collect(),
        }
    }
}
