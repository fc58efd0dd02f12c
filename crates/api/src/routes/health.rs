//! Health check endpoint.

use axum::Json;
use common::HealthResponse;

/// GET /health: liveness check, always reports `{"status":"ok"}`.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
