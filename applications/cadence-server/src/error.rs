/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadence_core::CadenceError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Media index error: {0}")]
    Index(#[from] CadenceError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<cadence_storage::StorageError> for ServerError {
    fn from(err: cadence_storage::StorageError) -> Self {
        // Convert StorageError -> CadenceError -> ServerError
        ServerError::Index(err.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Index(CadenceError::StoreUnavailable(ref msg)) => {
                tracing::error!("Media index unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Media index unavailable".to_string(),
                )
            }
            ServerError::Index(CadenceError::PlaylistNotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Playlist not found: {}", id))
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
