//! Handlers for the `/catalog` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tunebox_core::search::LibraryFilter;
use tunebox_core::track::Track;

use super::{parse_track_id, track_not_found};
use crate::error::AppResult;
use crate::response::{LibraryResponse, TracksResponse};
use crate::state::AppState;

/// Query parameters for `GET /catalog`.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring of the title or artist.
    pub q: Option<String>,
}

/// GET /catalog?q=
///
/// List the catalog, or search it when `q` is non-empty.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> AppResult<Json<TracksResponse>> {
    let tracks = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => state.catalog.search(q).await?,
        _ => state.catalog.list().await?,
    };
    tracing::debug!(count = tracks.len(), "Catalog listed");
    Ok(Json(TracksResponse { tracks }))
}

/// Query parameters for `GET /library`.
#[derive(Debug, Deserialize)]
pub struct LibraryQuery {
    /// `all`, `playlists`, `albums` or `artists` (singular kinds also accepted).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub q: Option<String>,
}

/// GET /library?type=&q=
///
/// Playlists, albums and artists, narrowed by tab and text query. Songs are
/// never part of the library view.
pub async fn library(
    State(state): State<AppState>,
    Query(params): Query<LibraryQuery>,
) -> AppResult<Json<LibraryResponse>> {
    let filter: LibraryFilter = params.kind.as_deref().unwrap_or_default().parse()?;
    let query = params.q.as_deref().unwrap_or_default();

    let items = state.catalog.library(filter, query).await?;
    tracing::debug!(?filter, count = items.len(), "Library listed");
    Ok(Json(LibraryResponse { items }))
}

/// GET /catalog/{track_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
) -> AppResult<Json<Track>> {
    let id = parse_track_id(&track_id)?;
    let track = state.catalog.get(id).await?.ok_or_else(|| track_not_found(id))?;
    Ok(Json(track))
}

/// POST /catalog/{track_id}/stream
///
/// Count one stream. Players call this on the first successful play of a
/// player-open session, so the count is per session rather than per listen.
pub async fn record_stream(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
) -> AppResult<Json<Track>> {
    let id = parse_track_id(&track_id)?;
    let track = state
        .catalog
        .record_stream(id)
        .await?
        .ok_or_else(|| track_not_found(id))?;
    tracing::info!(track_id = id, stream_count = track.stream_count, "Stream recorded");
    Ok(Json(track))
}
