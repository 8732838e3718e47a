/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub index_reachable: bool,
}

/// GET /api/health - Health check endpoint
///
/// Answers 503 when the media index cannot be reached.
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let reachable = match cadence_storage::ping(app_state.dispatcher.store().pool()).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Media index ping failed: {}", e);
            false
        }
    };

    let (status, label) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            index_reachable: reachable,
        }),
    )
}
