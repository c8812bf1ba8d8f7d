//! Health check endpoint.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Database reachability.
    pub database: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Reports the service as healthy only when the database answers a ping.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "up",
                version: env!("CARGO_PKG_VERSION"),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: "down",
                    version: env!("CARGO_PKG_VERSION"),
                }),
            )
        }
    }
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
