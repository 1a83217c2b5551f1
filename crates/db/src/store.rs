//! Store abstraction injected into the HTTP layer.
//!
//! Handlers hold `Arc<dyn CatalogStore>` (and friends) so the backing
//! implementation can be swapped between [`PgStore`](crate::PgStore) and the
//! in-memory [`MemoryStore`](crate::MemoryStore).

use async_trait::async_trait;
use tunebox_core::comment::{Comment, NewComment};
use tunebox_core::reaction::ReactionAction;
use tunebox_core::search::LibraryFilter;
use tunebox_core::track::Track;
use tunebox_core::types::DbId;

use crate::models::playlist::PlaylistWithTracks;
use crate::models::user::{CreateUser, User};

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An error from the PostgreSQL driver.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness rule was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing store cannot serve requests.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Short, non-sensitive category suitable for client-facing error details.
    pub fn category(&self) -> &'static str {
        match self {
            StoreError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                "connection"
            }
            StoreError::Database(sqlx::Error::Io(_) | sqlx::Error::Tls(_)) => "connection",
            StoreError::Database(_) => "query",
            StoreError::Conflict(_) => "conflict",
            StoreError::Unavailable(_) => "unavailable",
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The track catalog and its engagement counters.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Verify the store can serve requests.
    async fn health_check(&self) -> StoreResult<()>;

    /// Every song, ordered by id, with its comments.
    async fn list(&self) -> StoreResult<Vec<Track>>;

    /// Songs whose title or artist contains `query` (case-insensitive).
    async fn search(&self, query: &str) -> StoreResult<Vec<Track>>;

    /// Non-song entries admitted by `filter` whose title or artist contains
    /// `query`, ordered by id. An empty query matches every entry.
    async fn library(&self, filter: LibraryFilter, query: &str) -> StoreResult<Vec<Track>>;

    async fn get(&self, id: DbId) -> StoreResult<Option<Track>>;

    /// Whole-record replace keyed by `track.id`. Comments are not touched.
    async fn update(&self, track: &Track) -> StoreResult<Option<Track>>;

    /// Apply one reaction to the counters and return the updated track.
    async fn apply_reaction(&self, id: DbId, action: ReactionAction)
        -> StoreResult<Option<Track>>;

    /// Count one stream and return the updated track.
    async fn record_stream(&self, id: DbId) -> StoreResult<Option<Track>>;
}

/// The append-only comment ledger.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Append a comment. Returns `None` if the track does not exist.
    async fn append(&self, comment: &NewComment) -> StoreResult<Option<Comment>>;

    /// Comments of a track in insertion order.
    async fn list_for_track(&self, track_id: DbId) -> StoreResult<Vec<Comment>>;
}

/// Identity records and the playlists they own.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user. Fails with [`StoreError::Conflict`] if the email is taken.
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User>;

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Delete a user and their playlists. Returns `false` if no such user.
    async fn delete_user(&self, id: DbId) -> StoreResult<bool>;

    /// Playlists owned by a user with their tracks.
    async fn playlists_for(&self, owner_id: DbId) -> StoreResult<Vec<PlaylistWithTracks>>;
}
