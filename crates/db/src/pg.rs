//! PostgreSQL-backed store.

use std::collections::HashMap;

use async_trait::async_trait;
use tunebox_core::comment::{Comment, NewComment};
use tunebox_core::reaction::ReactionAction;
use tunebox_core::search::LibraryFilter;
use tunebox_core::track::Track;
use tunebox_core::types::DbId;

use crate::models::playlist::PlaylistWithTracks;
use crate::models::track::TrackRow;
use crate::models::user::{CreateUser, User};
use crate::repositories::{CommentRepo, PlaylistRepo, TrackRepo, UserRepo};
use crate::store::{CatalogStore, CommentStore, StoreError, StoreResult, UserStore};
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Store implementation delegating to the repository structs.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Attach comments to a batch of track rows with one extra query.
    async fn with_comments(&self, rows: Vec<TrackRow>) -> StoreResult<Vec<Track>> {
        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let mut by_track: HashMap<DbId, Vec<Comment>> = HashMap::new();
        for row in CommentRepo::list_for_tracks(&self.pool, &ids).await? {
            by_track.entry(row.track_id).or_default().push(row.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let comments = by_track.remove(&row.id).unwrap_or_default();
                row.into_track(comments)
            })
            .collect())
    }

    async fn with_own_comments(&self, row: Option<TrackRow>) -> StoreResult<Option<Track>> {
        match row {
            Some(row) => {
                let comments = self.list_for_track(row.id).await?;
                Ok(Some(row.into_track(comments)))
            }
            None => Ok(None),
        }
    }
}

fn has_code(err: &sqlx::Error, code: &str) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(code))
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Track>> {
        let rows = TrackRepo::list(&self.pool).await?;
        self.with_comments(rows).await
    }

    async fn search(&self, query: &str) -> StoreResult<Vec<Track>> {
        let rows = TrackRepo::search(&self.pool, query).await?;
        self.with_comments(rows).await
    }

    async fn library(&self, filter: LibraryFilter, query: &str) -> StoreResult<Vec<Track>> {
        let rows = TrackRepo::library(&self.pool, filter, query).await?;
        self.with_comments(rows).await
    }

    async fn get(&self, id: DbId) -> StoreResult<Option<Track>> {
        let row = TrackRepo::find_by_id(&self.pool, id).await?;
        self.with_own_comments(row).await
    }

    async fn update(&self, track: &Track) -> StoreResult<Option<Track>> {
        let row = TrackRepo::update(&self.pool, track).await?;
        self.with_own_comments(row).await
    }

    async fn apply_reaction(
        &self,
        id: DbId,
        action: ReactionAction,
    ) -> StoreResult<Option<Track>> {
        let row = TrackRepo::apply_reaction(&self.pool, id, action).await?;
        self.with_own_comments(row).await
    }

    async fn record_stream(&self, id: DbId) -> StoreResult<Option<Track>> {
        let row = TrackRepo::increment_stream_count(&self.pool, id).await?;
        self.with_own_comments(row).await
    }
}

#[async_trait]
impl CommentStore for PgStore {
    async fn append(&self, comment: &NewComment) -> StoreResult<Option<Comment>> {
        match CommentRepo::create(&self.pool, comment).await {
            Ok(row) => Ok(Some(row.into())),
            Err(e) if has_code(&e, FOREIGN_KEY_VIOLATION) => {
                tracing::debug!(track_id = comment.track_id, "Comment rejected, unknown track");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_for_track(&self, track_id: DbId) -> StoreResult<Vec<Comment>> {
        let rows = CommentRepo::list_for_track(&self.pool, track_id).await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        match UserRepo::create(&self.pool, input).await {
            Ok(user) => Ok(user),
            Err(e) if has_code(&e, UNIQUE_VIOLATION) => {
                tracing::debug!("User insert hit the email uniqueness constraint");
                Err(StoreError::Conflict(format!(
                    "A user with email '{}' already exists",
                    input.email
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        Ok(UserRepo::delete(&self.pool, id).await?)
    }

    async fn playlists_for(&self, owner_id: DbId) -> StoreResult<Vec<PlaylistWithTracks>> {
        let playlists = PlaylistRepo::list_for_owner(&self.pool, owner_id).await?;

        let mut result = Vec::with_capacity(playlists.len());
        for playlist in playlists {
            let tracks = PlaylistRepo::list_tracks(&self.pool, playlist.id)
                .await?
                .into_iter()
                .map(|row| row.into_track(Vec::new()))
                .collect();
            result.push(PlaylistWithTracks { playlist, tracks });
        }
        Ok(result)
    }
}
