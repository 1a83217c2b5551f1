//! Repository for the `tracks` table.

use sqlx::PgPool;
use tunebox_core::reaction::ReactionAction;
use tunebox_core::search::{like_pattern, LibraryFilter};
use tunebox_core::track::{Track, TrackKind};
use tunebox_core::types::DbId;

use crate::models::track::TrackRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, artist, duration, image, audio_url, kind, stream_count, likes, dislikes";

/// Provides catalog reads and counter updates for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// List every song ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<TrackRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE kind = $1 ORDER BY id");
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(TrackKind::Song.as_str())
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over songs on title OR artist,
    /// ordered by id.
    pub async fn search(pool: &PgPool, query_text: &str) -> Result<Vec<TrackRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks \
             WHERE kind = $1 AND (title ILIKE $2 OR artist ILIKE $2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(TrackKind::Song.as_str())
            .bind(like_pattern(query_text))
            .fetch_all(pool)
            .await
    }

    /// Library entries admitted by `filter` whose title or artist contains
    /// `query_text`, ordered by id. An empty query matches every entry.
    pub async fn library(
        pool: &PgPool,
        filter: LibraryFilter,
        query_text: &str,
    ) -> Result<Vec<TrackRow>, sqlx::Error> {
        let kinds: Vec<String> = filter.kinds().iter().map(|k| k.to_string()).collect();
        let query = format!(
            "SELECT {COLUMNS} FROM tracks \
             WHERE kind = ANY($1) AND (title ILIKE $2 OR artist ILIKE $2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(kinds)
            .bind(like_pattern(query_text))
            .fetch_all(pool)
            .await
    }

    /// Find a track by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TrackRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every column of a track, keyed by `track.id`.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(pool: &PgPool, track: &Track) -> Result<Option<TrackRow>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                title = $2, \
                artist = $3, \
                duration = $4, \
                image = $5, \
                audio_url = $6, \
                kind = $7, \
                stream_count = GREATEST($8, 0), \
                likes = GREATEST($9, 0), \
                dislikes = GREATEST($10, 0) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(track.id)
            .bind(&track.title)
            .bind(&track.artist)
            .bind(&track.duration)
            .bind(&track.image)
            .bind(&track.audio_url)
            .bind(track.kind.as_str())
            .bind(track.stream_count)
            .bind(track.likes)
            .bind(track.dislikes)
            .fetch_optional(pool)
            .await
    }

    /// Apply one reaction as a single atomic `UPDATE`. Removals floor at zero.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn apply_reaction(
        pool: &PgPool,
        id: DbId,
        action: ReactionAction,
    ) -> Result<Option<TrackRow>, sqlx::Error> {
        let assignment = match action {
            ReactionAction::Like => "likes = likes + 1",
            ReactionAction::RemoveLike => "likes = GREATEST(likes - 1, 0)",
            ReactionAction::Dislike => "dislikes = dislikes + 1",
            ReactionAction::RemoveDislike => "dislikes = GREATEST(dislikes - 1, 0)",
        };
        let query = format!("UPDATE tracks SET {assignment} WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Increment the stream counter by one.
    pub async fn increment_stream_count(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrackRow>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET stream_count = stream_count + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
