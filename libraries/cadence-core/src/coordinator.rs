//! Reorder coordinator
//!
//! Turns a [`MoveRequest`] into at most two store round-trips: an existence
//! probe, then the move itself. No state survives between calls.
//!
//! # Check-then-act
//!
//! [`ReorderCoordinator::move_item_to`] probes and moves in two separate
//! calls, so the playlist can be deleted in between. The mover then reports
//! `Ok(false)`, which is indistinguishable from any other rejected write.
//! Stores implementing [`ConditionalMover`] close the gap through
//! [`ReorderCoordinator::move_item_to_atomic`].

use crate::error::Result;
use crate::traits::{ConditionalMover, ExistenceProber, MemberMover};
use crate::types::MoveRequest;
use tracing::{debug, warn};

/// Orchestrates an [`ExistenceProber`] and a [`MemberMover`]
#[derive(Debug, Clone)]
pub struct ReorderCoordinator<P, M> {
    prober: P,
    mover: M,
}

impl<P, M> ReorderCoordinator<P, M> {
    /// Create a coordinator over the given collaborators
    pub fn new(prober: P, mover: M) -> Self {
        Self { prober, mover }
    }

    /// Get the existence prober
    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Get the member mover
    pub fn mover(&self) -> &M {
        &self.mover
    }
}

impl<P, M> ReorderCoordinator<P, M>
where
    P: ExistenceProber,
    M: MemberMover,
{
    /// Move the member at `request.from` to `request.to`.
    ///
    /// Returns `Ok(false)` without touching the mover when the playlist does
    /// not exist. Otherwise the mover's verdict is returned unchanged.
    /// Positions are not validated here.
    pub async fn move_item_to(&self, request: MoveRequest) -> Result<bool> {
        let MoveRequest {
            playlist_id,
            from,
            to,
        } = request;

        if !self.prober.exists(playlist_id).await? {
            debug!(%playlist_id, from, to, "Playlist not found, skipping move");
            return Ok(false);
        }

        let moved = self.mover.move_member(playlist_id, from, to).await?;
        if moved {
            debug!(%playlist_id, from, to, "Playlist member moved");
        } else {
            warn!(%playlist_id, from, to, "Store rejected playlist member move");
        }

        Ok(moved)
    }
}

impl<P, M> ReorderCoordinator<P, M>
where
    M: ConditionalMover,
{
    /// Move-if-exists in a single store write. The prober is not consulted.
    pub async fn move_item_to_atomic(&self, request: MoveRequest) -> Result<bool> {
        let MoveRequest {
            playlist_id,
            from,
            to,
        } = request;

        let moved = self
            .mover
            .move_member_if_exists(playlist_id, from, to)
            .await?;
        if moved {
            debug!(%playlist_id, from, to, "Playlist member moved atomically");
        } else {
            warn!(%playlist_id, from, to, "Conditional move rejected");
        }

        Ok(moved)
    }
}
