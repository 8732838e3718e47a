//! Playlist identifiers and reorder value types

mod ids;
mod reorder;

pub use ids::PlaylistId;
pub use reorder::{apply_move, MoveRequest, PlaylistMember, Position};
