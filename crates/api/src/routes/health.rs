use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Welcome response payload.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / -- fixed welcome message.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to QUOTEX",
    })
}

/// GET /health -- fixed liveness response with no dependency on the
/// quote-delivery pipeline.
async fn health_check() -> &'static str {
    "Integration is working!"
}

/// Mount the welcome and health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
}
