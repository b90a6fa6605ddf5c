//! Liveness check for deployments; reports which store is configured and
//! whether it answers.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    /// `postgres` or `memory`.
    pub store: &'static str,
    pub store_healthy: bool,
}

/// GET /health
///
/// Always 200; an unreachable store shows up as `"status": "degraded"`.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let store_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Store health check failed");
            false
        }
    };
    Json(HealthReport {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store: state.config.store_backend.as_str(),
        store_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
