//! Comment row model.

use sqlx::FromRow;
use tunebox_core::comment::Comment;
use tunebox_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: DbId,
    pub track_id: DbId,
    pub author: String,
    pub text: String,
    pub created_at: Timestamp,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            track_id: row.track_id,
            text: row.text,
            author: row.author,
            timestamp: row.created_at,
        }
    }
}
