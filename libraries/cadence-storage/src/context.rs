use crate::playlists;
use async_trait::async_trait;
use cadence_core::{
    error::Result,
    traits::{ConditionalMover, ExistenceProber, MemberMover, MembershipReader},
    types::*,
};
use sqlx::SqlitePool;

/// Media index backed by a `SQLite` database
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SqliteMediaIndex {
    pool: SqlitePool,
}

impl SqliteMediaIndex {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ExistenceProber for SqliteMediaIndex {
    async fn exists(&self, playlist_id: PlaylistId) -> Result<bool> {
        playlists::exists(&self.pool, playlist_id).await
    }
}

#[async_trait]
impl MemberMover for SqliteMediaIndex {
    async fn move_member(
        &self,
        playlist_id: PlaylistId,
        from: Position,
        to: Position,
    ) -> Result<bool> {
        playlists::move_member(&self.pool, playlist_id, from, to).await
    }
}

#[async_trait]
impl ConditionalMover for SqliteMediaIndex {
    async fn move_member_if_exists(
        &self,
        playlist_id: PlaylistId,
        from: Position,
        to: Position,
    ) -> Result<bool> {
        playlists::move_member_if_exists(&self.pool, playlist_id, from, to).await
    }
}

#[async_trait]
impl MembershipReader for SqliteMediaIndex {
    async fn member_order(&self, playlist_id: PlaylistId) -> Result<Option<Vec<PlaylistMember>>> {
        playlists::member_order(&self.pool, playlist_id).await
    }
}
