use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = learnhub_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
