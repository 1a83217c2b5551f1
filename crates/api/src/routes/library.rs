use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/library`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(catalog::library))
}
