//! Route definitions for the `/catalog` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{catalog, comment};
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET  /                      -> list (optional ?q= search)
/// GET  /{track_id}            -> get_by_id
/// POST /{track_id}/stream     -> record_stream
/// GET  /{track_id}/comments   -> list comments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list))
        .route("/{track_id}", get(catalog::get_by_id))
        .route("/{track_id}/stream", post(catalog::record_stream))
        .route("/{track_id}/comments", get(comment::list_for_track))
}
