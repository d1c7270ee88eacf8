//! Liveness endpoint, mounted at the root rather than under `/api/v1` so
//! uptime monitors can probe it without credentials.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for `GET /health`.
///
/// A down database degrades `status` but keeps the HTTP code at 200, so a
/// probe can tell "service unreachable" apart from "service unhappy".
#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = linkify_db::health_check(&state.pool).await.is_ok();

    Json(HealthStatus {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
