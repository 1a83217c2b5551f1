//! Handler for like/dislike reactions.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tunebox_core::error::CoreError;
use tunebox_core::reaction::ReactionAction;
use tunebox_core::track::Track;

use super::{parse_track_id, track_not_found};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /reaction/{track_id}`.
#[derive(Debug, Deserialize)]
pub struct ReactionRequest {
    /// One of `like`, `removeLike`, `dislike`, `removeDislike`.
    pub action: Option<String>,
}

/// POST /reaction/{track_id}
///
/// Apply one reaction to the track's counters and echo the updated track.
/// Removals never take a counter below zero.
pub async fn react(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
    payload: Result<Json<ReactionRequest>, JsonRejection>,
) -> AppResult<Json<Track>> {
    let id = parse_track_id(&track_id)?;
    let Json(input) = payload?;

    let action: ReactionAction = input
        .action
        .as_deref()
        .ok_or(AppError::Core(CoreError::MissingField("action")))?
        .parse()?;

    let track = state
        .catalog
        .apply_reaction(id, action)
        .await?
        .ok_or_else(|| track_not_found(id))?;

    tracing::info!(
        track_id = id,
        %action,
        likes = track.likes,
        dislikes = track.dislikes,
        "Reaction applied"
    );
    Ok(Json(track))
}
