//! Typed request/response surface
//!
//! Each supported operation is one variant of [`Request`] carrying its own
//! payload struct. On the wire a request looks like
//! `{"method": "moveItemTo", "args": {"playlistId": 123, "from": 0, "to": 1}}`
//! and unknown methods fail at deserialization.

use crate::coordinator::ReorderCoordinator;
use crate::error::Result;
use crate::traits::{ConditionalMover, ExistenceProber, MemberMover, MembershipReader};
use crate::types::{MoveRequest, PlaylistId, PlaylistMember};
use serde::{Deserialize, Serialize};

/// Payload of [`Request::PlaylistMembers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistMembers {
    /// Playlist to read
    pub playlist_id: PlaylistId,
}

/// Supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "args", rename_all = "camelCase")]
pub enum Request {
    /// Move one member to a new position
    MoveItemTo(MoveRequest),
    /// Read the current member order
    PlaylistMembers(PlaylistMembers),
}

/// Result of a dispatched [`Request`], one variant per operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "result", rename_all = "camelCase")]
pub enum Response {
    /// Whether the move committed
    MoveItemTo(bool),
    /// `None` when the playlist does not exist
    PlaylistMembers(Option<Vec<PlaylistMember>>),
}

/// How `moveItemTo` reaches the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStrategy {
    /// Probe, then move, in two round-trips
    #[default]
    ProbeThenMove,
    /// Single move-if-exists write
    Atomic,
}

/// Routes typed requests to a store implementing every capability
#[derive(Debug, Clone)]
pub struct Dispatcher<S> {
    coordinator: ReorderCoordinator<S, S>,
    strategy: MoveStrategy,
}

impl<S> Dispatcher<S>
where
    S: ExistenceProber + MemberMover + ConditionalMover + MembershipReader + Clone,
{
    /// Create a dispatcher with the default strategy
    pub fn new(store: S) -> Self {
        Self::with_strategy(store, MoveStrategy::default())
    }

    /// Create a dispatcher with an explicit move strategy
    pub fn with_strategy(store: S, strategy: MoveStrategy) -> Self {
        Self {
            coordinator: ReorderCoordinator::new(store.clone(), store),
            strategy,
        }
    }

    /// The store every request is routed to
    pub fn store(&self) -> &S {
        self.coordinator.prober()
    }

    /// Active move strategy
    pub fn strategy(&self) -> MoveStrategy {
        self.strategy
    }

    /// Move one member, honoring the configured strategy
    pub async fn move_item_to(&self, request: MoveRequest) -> Result<bool> {
        match self.strategy {
            MoveStrategy::ProbeThenMove => self.coordinator.move_item_to(request).await,
            MoveStrategy::Atomic => self.coordinator.move_item_to_atomic(request).await,
        }
    }

    /// Current member order of a playlist
    pub async fn playlist_members(
        &self,
        playlist_id: PlaylistId,
    ) -> Result<Option<Vec<PlaylistMember>>> {
        self.coordinator.mover().member_order(playlist_id).await
    }

    /// Execute a request
    pub async fn dispatch(&self, request: Request) -> Result<Response> {
        tracing::debug!(?request, "Dispatching request");
        match request {
            Request::MoveItemTo(req) => self.move_item_to(req).await.map(Response::MoveItemTo),
            Request::PlaylistMembers(PlaylistMembers { playlist_id }) => self
                .playlist_members(playlist_id)
                .await
                .map(Response::PlaylistMembers),
        }
    }
}
