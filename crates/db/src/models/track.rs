//! Track row model.

use sqlx::FromRow;
use tunebox_core::comment::Comment;
use tunebox_core::track::{Track, TrackKind};
use tunebox_core::types::DbId;

/// A row from the `tracks` table (comments live in their own table).
#[derive(Debug, Clone, FromRow)]
pub struct TrackRow {
    pub id: DbId,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub image: String,
    pub audio_url: String,
    #[sqlx(try_from = "String")]
    pub kind: TrackKind,
    pub stream_count: i64,
    pub likes: i64,
    pub dislikes: i64,
}

impl TrackRow {
    /// Attach the track's comment ledger to build the client-facing record.
    pub fn into_track(self, comments: Vec<Comment>) -> Track {
        Track {
            id: self.id,
            title: self.title,
            artist: self.artist,
            duration: self.duration,
            image: self.image,
            audio_url: self.audio_url,
            kind: self.kind,
            stream_count: self.stream_count,
            likes: self.likes,
            dislikes: self.dislikes,
            comments,
        }
    }
}
