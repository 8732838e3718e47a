/// Playlists API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use cadence_core::{CadenceError, MoveRequest, PlaylistId, PlaylistMember, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MoveItemRequest {
    pub from: Position,
    pub to: Position,
}

#[derive(Debug, Serialize)]
pub struct MoveItemResponse {
    pub success: bool,
}

/// POST /api/playlists/:id/move
/// Move the member at `from` to `to`. A missing playlist or rejected move is
/// `{"success": false}` with status 200.
pub async fn move_item(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
    Json(req): Json<MoveItemRequest>,
) -> Result<Json<MoveItemResponse>> {
    let request = MoveRequest::new(PlaylistId::new(id), req.from, req.to);
    let success = app_state.dispatcher.move_item_to(request).await?;
    Ok(Json(MoveItemResponse { success }))
}

/// GET /api/playlists/:id/members
/// Current member order of a playlist
pub async fn list_members(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<PlaylistMember>>> {
    let playlist_id = PlaylistId::new(id);
    let members = app_state
        .dispatcher
        .playlist_members(playlist_id)
        .await?
        .ok_or(CadenceError::PlaylistNotFound(playlist_id))?;

    Ok(Json(members))
}
