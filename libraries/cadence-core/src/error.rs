//! Core error types for Cadence

use thiserror::Error;
use crate::types::PlaylistId;

/// Result type alias using `CadenceError`
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Core error type for Cadence
///
/// A playlist that does not exist, or a move the store refuses, is not an
/// error: both surface as `Ok(false)`. Errors are reserved for cases where
/// the truth could not be determined.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// The backing store could not be queried or written (connectivity, permission)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Playlist not found (only raised by APIs that require the playlist to exist)
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),
}

impl CadenceError {
    /// Create a store unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Whether this error means the store itself could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CadenceError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}
