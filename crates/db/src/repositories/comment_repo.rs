//! Repository for the `comments` table.

use sqlx::PgPool;
use tunebox_core::comment::NewComment;
use tunebox_core::types::DbId;

use crate::models::comment::CommentRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, track_id, author, text, created_at";

/// Append-only access to track comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Append a comment, returning the created row.
    ///
    /// Fails with a foreign-key violation (`23503`) if the track does not exist.
    pub async fn create(pool: &PgPool, input: &NewComment) -> Result<CommentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (track_id, author, text) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommentRow>(&query)
            .bind(input.track_id)
            .bind(&input.author)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Comments of one track in insertion order.
    pub async fn list_for_track(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<Vec<CommentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE track_id = $1 ORDER BY id");
        sqlx::query_as::<_, CommentRow>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    /// Comments of several tracks, grouped by track and in insertion order.
    pub async fn list_for_tracks(
        pool: &PgPool,
        track_ids: &[DbId],
    ) -> Result<Vec<CommentRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE track_id = ANY($1) ORDER BY track_id, id"
        );
        sqlx::query_as::<_, CommentRow>(&query)
            .bind(track_ids)
            .fetch_all(pool)
            .await
    }
}
