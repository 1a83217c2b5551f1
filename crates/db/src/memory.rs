//! In-memory store seeded with a fixture catalog.
//!
//! Used by the test suites and by `STORE_BACKEND=memory` for local demos.
//! All state sits behind one `RwLock`; searches are linear scans.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tunebox_core::comment::{Comment, NewComment};
use tunebox_core::reaction::ReactionAction;
use tunebox_core::search::{self, LibraryFilter};
use tunebox_core::track::{Track, TrackKind};
use tunebox_core::types::DbId;

use crate::models::playlist::{Playlist, PlaylistWithTracks};
use crate::models::user::{CreateUser, User};
use crate::store::{CatalogStore, CommentStore, StoreError, StoreResult, UserStore};

/// The catalog every fresh [`MemoryStore::seeded`] starts with: four songs
/// (ids 1-4) followed by four library entries (ids 5-8).
///
/// Matches the seed migration of the PostgreSQL schema.
pub fn fixture_tracks() -> Vec<Track> {
    let songs = [
        ("Bohemian Rhapsody", "Queen", "5:55", "/queen.jpg", "bohemian-rhapsody"),
        ("Hotel California", "Eagles", "6:30", "/eagles.jpg", "hotel-california"),
        ("Sweet Child O Mine", "Guns N Roses", "5:56", "/guns.jpg", "sweet-child-o-mine"),
        ("Blinding Lights", "The Weeknd", "3:20", "/weeknd.jpg", "blinding-lights"),
    ]
    .map(|(title, artist, duration, image, slug)| {
        (title, artist, duration, image, format!("/audio/{slug}.mp3"), TrackKind::Song)
    });

    let library = [
        ("Liked Songs", "Various Artists", "2h 34m", "/liked-songs.jpg", TrackKind::Playlist),
        ("Summer Hits", "Spotify", "3h 12m", "/summer-hits.jpg", TrackKind::Playlist),
        ("Dark Side of the Moon", "Pink Floyd", "42:56", "/dark-side.jpg", TrackKind::Album),
        ("The Weeknd", "The Weeknd", "", "/weeknd.jpg", TrackKind::Artist),
    ]
    .map(|(title, artist, duration, image, kind)| {
        (title, artist, duration, image, String::new(), kind)
    });

    songs
        .into_iter()
        .chain(library)
        .zip(1..)
        .map(|((title, artist, duration, image, audio_url, kind), id)| Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration: duration.to_string(),
            image: image.to_string(),
            audio_url,
            kind,
            stream_count: 0,
            likes: 0,
            dislikes: 0,
            comments: Vec::new(),
        })
        .collect()
}

#[derive(Default)]
struct MemoryState {
    tracks: Vec<Track>,
    users: Vec<User>,
    playlists: Vec<(Playlist, Vec<DbId>)>,
    next_comment_id: DbId,
    next_user_id: DbId,
    next_playlist_id: DbId,
}

impl MemoryState {
    fn track_mut(&mut self, id: DbId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }
}

pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// A store holding `tracks` and no users.
    pub fn new(tracks: Vec<Track>) -> Self {
        let next_comment_id = tracks
            .iter()
            .flat_map(|t| t.comments.iter().map(|c| c.id))
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            state: RwLock::new(MemoryState {
                tracks,
                next_comment_id,
                next_user_id: 1,
                next_playlist_id: 1,
                ..MemoryState::default()
            }),
        }
    }

    /// A store holding [`fixture_tracks`].
    pub fn seeded() -> Self {
        Self::new(fixture_tracks())
    }

    /// Create a playlist owned by `owner_id` holding `track_ids` in order.
    ///
    /// Unknown track ids are skipped when the playlist is read back.
    pub async fn add_playlist(&self, owner_id: DbId, name: &str, track_ids: &[DbId]) -> Playlist {
        let mut state = self.state.write().await;
        let playlist = Playlist {
            id: state.next_playlist_id,
            owner_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        state.next_playlist_id += 1;
        state.playlists.push((playlist.clone(), track_ids.to_vec()));
        playlist
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Track>> {
        let mut tracks: Vec<Track> = self
            .state
            .read()
            .await
            .tracks
            .iter()
            .filter(|t| t.kind == TrackKind::Song)
            .cloned()
            .collect();
        tracks.sort_by_key(|t| t.id);
        Ok(tracks)
    }

    async fn search(&self, query: &str) -> StoreResult<Vec<Track>> {
        let tracks = self.list().await?;
        Ok(search::filter_tracks(tracks, query))
    }

    async fn library(&self, filter: LibraryFilter, query: &str) -> StoreResult<Vec<Track>> {
        let mut tracks = self.state.read().await.tracks.clone();
        tracks.sort_by_key(|t| t.id);
        Ok(search::filter_library(tracks, filter, query))
    }

    async fn get(&self, id: DbId) -> StoreResult<Option<Track>> {
        let state = self.state.read().await;
        Ok(state.tracks.iter().find(|t| t.id == id).cloned())
    }

    async fn update(&self, track: &Track) -> StoreResult<Option<Track>> {
        let mut state = self.state.write().await;
        let Some(existing) = state.track_mut(track.id) else {
            return Ok(None);
        };

        let comments = std::mem::take(&mut existing.comments);
        *existing = Track {
            stream_count: track.stream_count.max(0),
            likes: track.likes.max(0),
            dislikes: track.dislikes.max(0),
            comments,
            ..track.clone()
        };
        Ok(Some(existing.clone()))
    }

    async fn apply_reaction(
        &self,
        id: DbId,
        action: ReactionAction,
    ) -> StoreResult<Option<Track>> {
        let mut state = self.state.write().await;
        let Some(track) = state.track_mut(id) else {
            return Ok(None);
        };

        let counts = track.counts().apply(action);
        track.likes = counts.likes;
        track.dislikes = counts.dislikes;
        Ok(Some(track.clone()))
    }

    async fn record_stream(&self, id: DbId) -> StoreResult<Option<Track>> {
        let mut state = self.state.write().await;
        let Some(track) = state.track_mut(id) else {
            return Ok(None);
        };

        track.stream_count += 1;
        Ok(Some(track.clone()))
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn append(&self, comment: &NewComment) -> StoreResult<Option<Comment>> {
        let mut state = self.state.write().await;
        let id = state.next_comment_id;
        let Some(track) = state.track_mut(comment.track_id) else {
            return Ok(None);
        };

        let created = Comment {
            id,
            track_id: comment.track_id,
            text: comment.text.clone(),
            author: comment.author.clone(),
            timestamp: Utc::now(),
        };
        track.comments.push(created.clone());
        state.next_comment_id += 1;
        Ok(Some(created))
    }

    async fn list_for_track(&self, track_id: DbId) -> StoreResult<Vec<Comment>> {
        let state = self.state.read().await;
        Ok(state
            .tracks
            .iter()
            .find(|t| t.id == track_id)
            .map(|t| t.comments.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.email == input.email) {
            return Err(StoreError::Conflict(format!(
                "A user with email '{}' already exists",
                input.email
            )));
        }

        let user = User {
            id: state.next_user_id,
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            followers: 0,
            following: 0,
            created_at: Utc::now(),
        };
        state.next_user_id += 1;
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        state.playlists.retain(|(p, _)| p.owner_id != id);
        Ok(state.users.len() < before)
    }

    async fn playlists_for(&self, owner_id: DbId) -> StoreResult<Vec<PlaylistWithTracks>> {
        let state = self.state.read().await;
        Ok(state
            .playlists
            .iter()
            .filter(|(p, _)| p.owner_id == owner_id)
            .map(|(playlist, track_ids)| PlaylistWithTracks {
                playlist: playlist.clone(),
                tracks: track_ids
                    .iter()
                    .filter_map(|id| state.tracks.iter().find(|t| t.id == *id))
                    .map(|t| Track {
                        comments: Vec::new(),
                        ..t.clone()
                    })
                    .collect(),
            })
            .collect())
    }
}
