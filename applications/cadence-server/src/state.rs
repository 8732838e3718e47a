/// Shared application state
use cadence_core::Dispatcher;
use cadence_storage::SqliteMediaIndex;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher<SqliteMediaIndex>>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher<SqliteMediaIndex>>) -> Self {
        Self { dispatcher }
    }
}
