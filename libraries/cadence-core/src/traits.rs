//! Capability traits over the backing media index
//!
//! The backing store is external and not owned by Cadence. These traits are
//! the only surface the reorder protocol needs from it, which lets tests swap
//! in `MemoryIndex` or `mockall` doubles.
use crate::error::Result;
use crate::types::{PlaylistId, PlaylistMember, Position};
use async_trait::async_trait;

/// Answers "does playlist P exist right now"
///
/// An empty result is `Ok(false)`. A query that cannot be issued at all must
/// return `Err`, never `Ok(false)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExistenceProber: Send + Sync {
    /// Check whether a playlist record matches `playlist_id`
    async fn exists(&self, playlist_id: PlaylistId) -> Result<bool>;
}

/// Relocates one member of a playlist
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberMover: Send + Sync {
    /// Move the member at `from` to `to`, shifting the members in between by one.
    ///
    /// `Ok(true)` means the new order is committed. `Ok(false)` means the
    /// store refused (positions out of range, playlist gone, write conflict).
    async fn move_member(&self, playlist_id: PlaylistId, from: Position, to: Position)
        -> Result<bool>;
}

/// Stores that can check existence and move inside one atomic write
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConditionalMover: Send + Sync {
    /// Move-if-exists. Same verdicts as [`MemberMover::move_member`], with a
    /// missing playlist reported as `Ok(false)`.
    async fn move_member_if_exists(
        &self,
        playlist_id: PlaylistId,
        from: Position,
        to: Position,
    ) -> Result<bool>;
}

/// Reads the current member order of a playlist
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipReader: Send + Sync {
    /// Members ordered by position, or `None` if the playlist does not exist
    async fn member_order(&self, playlist_id: PlaylistId) -> Result<Option<Vec<PlaylistMember>>>;
}
