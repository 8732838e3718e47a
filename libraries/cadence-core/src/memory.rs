//! In-memory media index
//!
//! A fake backing store used by tests and local tooling. Holds playlists as
//! ordered vectors of member ids and can be switched into an "unavailable"
//! state to exercise error propagation.

use crate::error::{CadenceError, Result};
use crate::traits::{ConditionalMover, ExistenceProber, MemberMover, MembershipReader};
use crate::types::{apply_move, PlaylistId, PlaylistMember, Position};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store. Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    playlists: Arc<RwLock<HashMap<PlaylistId, Vec<i64>>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that seeds one playlist
    #[must_use]
    ///
    /// # Panics
    ///
    /// Panics if a clone of this index currently holds the lock.
    pub fn with_playlist(self, id: PlaylistId, members: Vec<i64>) -> Self {
        self.playlists
            .try_write()
            .expect("MemoryIndex seeded while its lock is held")
            .insert(id, members);
        self
    }

    /// Insert or replace a playlist
    pub async fn insert_playlist(&self, id: PlaylistId, members: Vec<i64>) {
        self.playlists.write().await.insert(id, members);
    }

    /// Remove a playlist, returning whether it existed
    pub async fn remove_playlist(&self, id: PlaylistId) -> bool {
        self.playlists.write().await.remove(&id).is_some()
    }

    /// Current member ids of a playlist, in order
    pub async fn members(&self, id: PlaylistId) -> Option<Vec<i64>> {
        self.playlists.read().await.get(&id).cloned()
    }

    /// Simulate an unreachable store. Every call fails while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CadenceError::unavailable("memory index marked unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl ExistenceProber for MemoryIndex {
    async fn exists(&self, playlist_id: PlaylistId) -> Result<bool> {
        self.check_available()?;
        Ok(self.playlists.read().await.contains_key(&playlist_id))
    }
}

#[async_trait]
impl MemberMover for MemoryIndex {
    async fn move_member(
        &self,
        playlist_id: PlaylistId,
        from: Position,
        to: Position,
    ) -> Result<bool> {
        self.check_available()?;
        let mut playlists = self.playlists.write().await;
        Ok(playlists
            .get_mut(&playlist_id)
            .is_some_and(|members| apply_move(members, from, to)))
    }
}

#[async_trait]
impl ConditionalMover for MemoryIndex {
    async fn move_member_if_exists(
        &self,
        playlist_id: PlaylistId,
        from: Position,
        to: Position,
    ) -> Result<bool> {
        // Lookup and move happen under one write guard
        self.move_member(playlist_id, from, to).await
    }
}

#[async_trait]
impl MembershipReader for MemoryIndex {
    async fn member_order(&self, playlist_id: PlaylistId) -> Result<Option<Vec<PlaylistMember>>> {
        self.check_available()?;
        Ok(self.playlists.read().await.get(&playlist_id).map(|members| {
            members
                .iter()
                .zip(0..)
                .map(|(&member_id, position)| PlaylistMember {
                    member_id,
                    position,
                })
                .collect()
        }))
    }
}
