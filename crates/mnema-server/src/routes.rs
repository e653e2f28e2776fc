use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    routing::{get, post},
};
use mnema_types::{HintRequest, HintResult};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub generator: bool,
    pub model: String,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/hint", post(create_hint))
        .route("/api/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// POST /api/hint
///
/// Always 200. The body is read as raw bytes so an oversized, malformed or
/// missing JSON body becomes an empty request rather than a 4xx.
async fn create_hint(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Json<HintResult> {
    let request = match body {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::debug!("unreadable hint request body: {e}");
            HintRequest::default()
        }),
        Err(rejection) => {
            tracing::warn!("hint request body rejected: {rejection}");
            HintRequest::default()
        }
    };

    let (result, outcome) = state.service.resolve(&request).await;
    tracing::info!(?outcome, "hint served");

    Json(result)
}

/// GET /api/health
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        generator: state.service.has_generator(),
        model: state.service.model().to_string(),
    })
}
