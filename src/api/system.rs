use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::warn;

use super::{ApiResponse, AppState, HealthDto};

/// GET /system/health
///
/// Always answers 200; `database` reports whether the store responded.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthDto>> {
    let database = match state.store().ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!("Health check could not reach the database: {e}");
            "unavailable"
        }
    };

    let status = if database == "ok" { "ok" } else { "degraded" };

    Json(ApiResponse::success(HealthDto {
        status: status.to_string(),
        database: database.to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
