use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::Envelope;
use crate::state::AppState;

/// Health details carried in the envelope's `data`.
#[derive(Serialize)]
pub struct HealthData {
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- reports the service as active, with database reachability.
///
/// Always 200: a degraded database is reported in `data`, not the status.
async fn health_check(State(state): State<AppState>) -> Json<Envelope<HealthData>> {
    let db_healthy = cinedex_db::health_check(&state.pool).await.is_ok();

    Json(Envelope::success(
        format!("{} is active...", state.config.service_name),
        HealthData {
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        },
    ))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
