//! Cadence Server Library
//!
//! HTTP and command-line front end for the Cadence playlist reorder service.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use cadence_core::Dispatcher;
use cadence_storage::SqliteMediaIndex;
use std::sync::Arc;

/// Connect to the configured database, apply migrations and build the state
pub async fn connect(config: &ServerConfig) -> Result<AppState> {
    let pool = cadence_storage::create_pool_with(
        &config.storage.database_url,
        config.storage.pool_settings(),
    )
    .await?;
    cadence_storage::run_migrations(&pool).await?;

    let index = SqliteMediaIndex::new(pool);
    let dispatcher = Dispatcher::with_strategy(index, config.reorder.strategy);
    tracing::info!(strategy = ?dispatcher.strategy(), "Media index connected");

    Ok(AppState::new(Arc::new(dispatcher)))
}
