//! Routes for the signed-in user. Both require a session token.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes merged at the root.
///
/// ```text
/// GET    /profile   -> get_profile
/// DELETE /account   -> delete_account
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(account::get_profile))
        .route("/account", delete(account::delete_account))
}
