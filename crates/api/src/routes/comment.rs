use axum::routing::post;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comment`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(comment::create))
}
