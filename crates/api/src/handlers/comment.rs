//! Handlers for the comment ledger.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tunebox_core::comment::{Comment, NewComment};

use super::{parse_track_id, track_not_found};
use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /comment`.
///
/// Fields are optional so a missing field is reported as such rather than as
/// a generic body error. `trackId` may be sent as a string or a number.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub track_id: Option<Value>,
    pub author: Option<String>,
    pub text: Option<String>,
}

fn id_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// POST /comment
///
/// Append a comment to a track's ledger. Returns 201 with the created comment.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let Json(input) = payload?;
    let track_id = id_text(input.track_id.as_ref());

    let new_comment = NewComment::parse(
        track_id.as_deref(),
        input.author.as_deref(),
        input.text.as_deref(),
    )?;

    let comment = state
        .comments
        .append(&new_comment)
        .await?
        .ok_or_else(|| track_not_found(new_comment.track_id))?;

    tracing::info!(
        track_id = comment.track_id,
        comment_id = comment.id,
        "Comment posted"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /catalog/{track_id}/comments
///
/// The track's ledger in insertion order.
pub async fn list_for_track(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
) -> AppResult<Json<Vec<Comment>>> {
    let id = parse_track_id(&track_id)?;
    if state.catalog.get(id).await?.is_none() {
        return Err(track_not_found(id));
    }
    let comments = state.comments.list_for_track(id).await?;
    Ok(Json(comments))
}
