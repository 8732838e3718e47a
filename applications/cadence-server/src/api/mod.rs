/// API route modules
pub mod dispatch;
pub mod health;
pub mod playlists;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the `/api` router
pub fn router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/dispatch", post(dispatch::dispatch))
        .route("/playlists/:id/move", post(playlists::move_item))
        .route("/playlists/:id/members", get(playlists::list_members));

    Router::new()
        .nest("/api", routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}
