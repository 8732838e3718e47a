/// Typed dispatch route
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use cadence_core::{Request, Response};

/// POST /api/dispatch
/// Execute one typed request, e.g. `{"method": "moveItemTo", "args": {...}}`
pub async fn dispatch(
    State(app_state): State<AppState>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let response = app_state.dispatcher.dispatch(request).await?;
    Ok(Json(response))
}
