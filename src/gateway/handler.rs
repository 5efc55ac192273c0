use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument, warn};

use crate::llm::GenerationBackend;
use crate::similarity::{Calculation, ScoreOutcome};

use super::KINDRED_STATUS_HEADER;
use super::error::GatewayError;
use super::payload::{GENERATION_PLACEHOLDER, SimilarityRequest, SimilarityResponse};
use super::state::HandlerState;

/// Scores two prompts and optionally cascades into text generation.
///
/// The request body is taken as raw JSON and parsed explicitly so schema
/// violations surface as structured 400s rather than extractor rejections.
#[instrument(skip(state, request), fields(metric = tracing::field::Empty))]
pub async fn similarity_handler<G>(
    State(state): State<HandlerState<G>>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    G: GenerationBackend + 'static,
{
    let request: SimilarityRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request schema: {}", e)))?;
    tracing::Span::current().record(
        "metric",
        tracing::field::display(request.similarity_metric),
    );

    request.validate()?;

    let prompt1 = request.prompt1.trim();
    let prompt2 = request.prompt2.trim();

    // A prompt that sanitization would alter is rejected outright rather
    // than silently scored against the scrubbed form.
    if !state.sanitizer.is_clean(prompt1) || !state.sanitizer.is_clean(prompt2) {
        return Err(GatewayError::InvalidRequest(
            "prompt rejected by content policy".to_string(),
        ));
    }

    let calculation = state
        .engine
        .calculate(prompt1, prompt2, request.similarity_metric);
    let score = calculation.score();
    let are_similar = score >= request.similarity_threshold;

    debug!(
        score,
        are_similar,
        cache_hit = calculation.cache_hit,
        "similarity computed"
    );

    let mut response = SimilarityResponse {
        are_similar,
        similarity_metric: request.similarity_metric,
        similarity_score: score,
        llm_response: None,
    };

    if request.use_llm && are_similar {
        let generated = match state
            .generation
            .generate_with_retry(prompt1, state.llm_retries)
            .await
        {
            Ok(text) => state.sanitizer.sanitize(&text),
            Err(error) => {
                warn!(%error, "generation failed, substituting placeholder");
                GENERATION_PLACEHOLDER.to_string()
            }
        };
        response.llm_response = Some(generated);
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        KINDRED_STATUS_HEADER,
        HeaderValue::from_static(status_label(&calculation)),
    );
    Ok((StatusCode::OK, headers, Json(response)).into_response())
}

/// Maps a calculation to the `X-Kindred-Status` response header value.
pub(crate) fn status_label(calculation: &Calculation) -> &'static str {
    if calculation.cache_hit {
        return "CACHE_HIT";
    }

    match calculation.outcome {
        ScoreOutcome::Scored(_) => "COMPUTED",
        ScoreOutcome::Degraded { reason, .. } if reason.is_fallback() => "DEGRADED_FALLBACK",
        ScoreOutcome::Degraded { .. } => "DEGRADED_ZERO",
    }
}

#[cfg(test)]
mod status_label_tests {
    use super::*;
    use crate::similarity::DegradeReason;

    fn calc(outcome: ScoreOutcome, cache_hit: bool) -> Calculation {
        Calculation { outcome, cache_hit }
    }

    #[test]
    fn test_cache_hit_label_wins() {
        let calculation = calc(ScoreOutcome::Scored(0.5), true);
        assert_eq!(status_label(&calculation), "CACHE_HIT");
    }

    #[test]
    fn test_computed_label() {
        let calculation = calc(ScoreOutcome::Scored(0.5), false);
        assert_eq!(status_label(&calculation), "COMPUTED");
    }

    #[test]
    fn test_fallback_label() {
        let calculation = calc(
            ScoreOutcome::Degraded {
                score: 0.5,
                reason: DegradeReason::ModelUnavailable,
            },
            false,
        );
        assert_eq!(status_label(&calculation), "DEGRADED_FALLBACK");
    }

    #[test]
    fn test_zero_default_label() {
        let calculation = calc(
            ScoreOutcome::Degraded {
                score: 0.0,
                reason: DegradeReason::EmptyVocabulary,
            },
            false,
        );
        assert_eq!(status_label(&calculation), "DEGRADED_ZERO");
    }
}
