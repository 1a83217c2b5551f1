//! Playlist row model.

use sqlx::FromRow;
use tunebox_core::track::Track;
use tunebox_core::types::{DbId, Timestamp};

/// A row from the `playlists` table.
#[derive(Debug, Clone, FromRow)]
pub struct Playlist {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A playlist together with its tracks in playlist order.
#[derive(Debug, Clone)]
pub struct PlaylistWithTracks {
    pub playlist: Playlist,
    pub tracks: Vec<Track>,
}
