//! HTTP gateway (Axum) for similarity scoring.
//!
//! This module is primarily used by the `kindred` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::similarity_handler;
pub use state::HandlerState;

use crate::constants::SERVICE_NAME;
use crate::llm::GenerationBackend;
use payload::{HealthResponse, MetricsResponse};

/// Response header carrying the outcome of a similarity request.
pub const KINDRED_STATUS_HEADER: &str = "X-Kindred-Status";
pub const KINDRED_STATUS_HEALTHY: &str = "healthy";

pub fn create_router_with_state<G>(state: HandlerState<G>) -> Router
where
    G: GenerationBackend + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/similarity", post(similarity_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument(skip(state))]
pub async fn health_handler<G>(State(state): State<HandlerState<G>>) -> Response
where
    G: GenerationBackend + 'static,
{
    let llm_available = state.generation.is_available().await;

    let mut headers = HeaderMap::new();
    headers.insert(
        KINDRED_STATUS_HEADER,
        HeaderValue::from_static(KINDRED_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            llm_available,
            llm_model: state.llm_model.clone(),
            embedder_mode: state.engine.encoder_mode(),
        }),
    )
        .into_response()
}

#[tracing::instrument]
pub async fn metrics_handler() -> Json<MetricsResponse> {
    Json(MetricsResponse::current())
}
