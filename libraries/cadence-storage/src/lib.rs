//! Cadence Storage
//!
//! `SQLite` adapter implementing the Cadence capability traits.
//!
//! The adapter stands in for the external media index: it answers existence
//! probes, reports member order and performs single-member moves, each move
//! committed in one transaction before the call returns.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_storage::{SqliteMediaIndex, create_pool, run_migrations};
//! use cadence_core::{MoveRequest, PlaylistId, ReorderCoordinator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://cadence.db").await?;
//! run_migrations(&pool).await?;
//!
//! let index = SqliteMediaIndex::new(pool);
//! let coordinator = ReorderCoordinator::new(index.clone(), index);
//!
//! let moved = coordinator
//!     .move_item_to(MoveRequest::new(PlaylistId::new(1), 0, 3))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod playlists;

pub use context::SqliteMediaIndex;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use std::time::Duration;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// How long a writer waits on a locked database before SQLite reports `SQLITE_BUSY`
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Check that the database answers a trivial query
pub async fn ping(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool with default settings
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://cadence.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    create_pool_with(database_url, PoolSettings::default()).await
}

/// Create a new `SQLite` pool with explicit settings
pub async fn create_pool_with(
    database_url: &str,
    settings: PoolSettings,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    if settings.max_connections == 0 {
        return Err(StorageError::Connection(
            "max_connections must be at least 1".to_string(),
        ));
    }

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(settings.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "SQLite pool ready"
    );

    Ok(pool)
}
