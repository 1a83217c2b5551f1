//! Route definitions for the `/reaction` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::reaction;
use crate::state::AppState;

/// Routes mounted at `/reaction`.
///
/// ```text
/// POST /{track_id}   -> react
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{track_id}", post(reaction::react))
}
