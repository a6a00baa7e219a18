//! HTTP gateway (Axum) for search-and-answer and answer scoring.
//!
//! This module is primarily used by the `synapse` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{score_handler, search_handler};
pub use state::HandlerState;

use synapse::{TextGenerator, WebSearch};

/// Response header describing how a payload was produced.
pub const SYNAPSE_STATUS_HEADER: &str = "x-synapse-status";
pub const SYNAPSE_STATUS_OK: &str = "ok";
/// Search or generation failed; the body carries diagnostic text in place of content.
pub const SYNAPSE_STATUS_DEGRADED: &str = "degraded";
/// The score is the fixed fallback record.
pub const SYNAPSE_STATUS_FALLBACK: &str = "fallback";
pub const SYNAPSE_STATUS_INVALID: &str = "invalid";

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn create_router_with_state<S, G>(state: HandlerState<S, G>) -> Router
where
    S: WebSearch + 'static,
    G: TextGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler::<S, G>))
        .route("/api/health", get(health_handler::<S, G>))
        .route("/search", post(search_handler::<S, G>))
        .route("/api/search", post(search_handler::<S, G>))
        .route("/score", post(score_handler::<S, G>))
        .route("/api/score", post(score_handler::<S, G>))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub gemini_configured: bool,
}

#[tracing::instrument(skip(state))]
pub async fn health_handler<S, G>(State(state): State<HandlerState<S, G>>) -> Response
where
    S: WebSearch + 'static,
    G: TextGenerator + 'static,
{
    let mut headers = HeaderMap::new();
    headers.insert(
        SYNAPSE_STATUS_HEADER,
        HeaderValue::from_static(SYNAPSE_STATUS_OK),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "ok".to_string(),
            gemini_configured: state.gemini_configured(),
        }),
    )
        .into_response()
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn not_found_handler() -> GatewayError {
    GatewayError::NotFound
}
