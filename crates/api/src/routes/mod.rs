pub mod account;
pub mod auth;
pub mod catalog;
pub mod comment;
pub mod health;
pub mod library;
pub mod reaction;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog                         list, search with ?q=
/// /catalog/{track_id}              get one track
/// /catalog/{track_id}/stream       count a stream (POST)
/// /catalog/{track_id}/comments     comment ledger of a track
///
/// /library                         playlists, albums, artists (?type=&q=)
///
/// /reaction/{track_id}             like / dislike and removals (POST)
///
/// /comment                         post a comment (POST)
///
/// /auth/register                   create an account (public)
/// /auth/login                      obtain a session token (public)
/// /auth/check                      session status (public)
///
/// /profile                         profile view (requires auth)
/// /account                         delete account (requires auth)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/library", library::router())
        .nest("/reaction", reaction::router())
        .nest("/comment", comment::router())
        .nest("/auth", auth::router())
        .merge(account::router())
}
