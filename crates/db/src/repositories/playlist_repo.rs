//! Repository for the `playlists` and `playlist_tracks` tables.

use sqlx::PgPool;
use tunebox_core::types::DbId;

use crate::models::playlist::Playlist;
use crate::models::track::TrackRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, created_at";

/// Provides read access to user playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Playlists owned by a user, oldest first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Playlist>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM playlists WHERE owner_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Tracks of a playlist in playlist order.
    pub async fn list_tracks(
        pool: &PgPool,
        playlist_id: DbId,
    ) -> Result<Vec<TrackRow>, sqlx::Error> {
        sqlx::query_as::<_, TrackRow>(
            "SELECT t.id, t.title, t.artist, t.duration, t.image, t.audio_url, t.kind, \
                    t.stream_count, t.likes, t.dislikes \
             FROM playlist_tracks pt \
             JOIN tracks t ON t.id = pt.track_id \
             WHERE pt.playlist_id = $1 \
             ORDER BY pt.position",
        )
        .bind(playlist_id)
        .fetch_all(pool)
        .await
    }
}
