//! Handlers for the signed-in user's profile and account.

use axum::extract::State;
use axum::Json;
use tunebox_core::error::CoreError;
use tunebox_core::profile::{PlaylistSummary, Profile};
use tunebox_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{MessageResponse, ProfileResponse};
use crate::state::AppState;

fn user_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// GET /profile
///
/// The session user's name, social counters and owned playlists.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileResponse>> {
    let user = state
        .users
        .find_user(auth.user_id)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    let playlists = state
        .users
        .playlists_for(user.id)
        .await?
        .iter()
        .map(|p| {
            PlaylistSummary::from_tracks(
                p.playlist.id,
                &p.playlist.name,
                p.playlist.created_at,
                &p.tracks,
            )
        })
        .collect();

    Ok(Json(ProfileResponse {
        profile: Profile {
            name: user.name,
            followers: user.followers,
            following: user.following,
            playlists,
        },
    }))
}

/// DELETE /account
///
/// Permanently remove the session user and their playlists. The session token
/// itself stays valid until it expires but no longer resolves to a user.
pub async fn delete_account(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    if !state.users.delete_user(auth.user_id).await? {
        return Err(user_not_found(auth.user_id));
    }

    tracing::info!(user_id = auth.user_id, "Account deleted");
    Ok(Json(MessageResponse::new("Account deleted successfully")))
}
