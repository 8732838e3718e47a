//! Reorder request and membership types

use super::ids::PlaylistId;
use serde::{Deserialize, Serialize};

/// Zero-based index into a playlist's member sequence.
///
/// Signed so that out-of-range values from callers reach the store as-is.
pub type Position = i32;

/// A single "move member at `from` to `to`" request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Target playlist
    pub playlist_id: PlaylistId,
    /// Current position of the member to move
    pub from: Position,
    /// Position the member ends up at
    pub to: Position,
}

impl MoveRequest {
    /// Create a new move request
    pub fn new(playlist_id: PlaylistId, from: Position, to: Position) -> Self {
        Self {
            playlist_id,
            from,
            to,
        }
    }

    /// True when the request would leave the order untouched
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// One entry of a playlist's ordered member sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistMember {
    /// Store-assigned key of the referenced media item
    pub member_id: i64,
    /// Zero-based index within the playlist
    pub position: Position,
}

/// Apply list-move semantics to an ordered sequence.
///
/// Returns `false` and leaves `items` untouched when either position is
/// outside `0..items.len()`.
pub fn apply_move<T>(items: &mut Vec<T>, from: Position, to: Position) -> bool {
    let len = items.len();
    let (Ok(from), Ok(to)) = (usize::try_from(from), usize::try_from(to)) else {
        return false;
    };
    if from >= len || to >= len {
        return false;
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    true
}
