//! Integration tests for the PostgreSQL catalog and comment ledger.
//!
//! Runs `PgStore` against a fresh database with the real migrations applied
//! (including the seed catalog):
//! - Song listing, `ILIKE` search and wildcard escaping
//! - Library filtering by kind
//! - Atomic reaction and stream counters, with the zero floor on removals
//! - Comment appends, ordering, and the unknown-track mapping

use assert_matches::assert_matches;
use sqlx::PgPool;
use tunebox_core::comment::NewComment;
use tunebox_core::reaction::ReactionAction;
use tunebox_core::search::LibraryFilter;
use tunebox_core::track::TrackKind;
use tunebox_core::types::DbId;
use tunebox_db::{CatalogStore, CommentStore, PgStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a song directly, bypassing the store.
async fn insert_song(pool: &PgPool, title: &str, artist: &str) -> DbId {
    sqlx::query_scalar::<_, DbId>(
        "INSERT INTO tracks (title, artist, duration, audio_url) \
         VALUES ($1, $2, '3:00', '/a.mp3') \
         RETURNING id",
    )
    .bind(title)
    .bind(artist)
    .fetch_one(pool)
    .await
    .expect("song insert should succeed")
}

fn new_comment(track_id: DbId, text: &str) -> NewComment {
    NewComment {
        track_id,
        author: "Ana".to_string(),
        text: text.to_string(),
    }
}

fn titles(tracks: &[tunebox_core::track::Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Listing and search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_returns_seeded_songs_in_id_order(pool: PgPool) {
    let store = PgStore::new(pool);
    let tracks = store.list().await.unwrap();

    assert_eq!(
        titles(&tracks),
        ["Bohemian Rhapsody", "Hotel California", "Sweet Child O Mine", "Blinding Lights"]
    );
    assert!(tracks.iter().all(|t| t.kind == TrackKind::Song));
    assert!(tracks.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_is_case_insensitive_on_title_or_artist(pool: PgPool) {
    let store = PgStore::new(pool);

    assert_eq!(titles(&store.search("QUEEN").await.unwrap()), ["Bohemian Rhapsody"]);
    assert_eq!(titles(&store.search("califor").await.unwrap()), ["Hotel California"]);
    // The artist entry of the same name is not a song.
    assert_eq!(titles(&store.search("weeknd").await.unwrap()), ["Blinding Lights"]);
    assert!(store.search("zzz-no-match").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    insert_song(&pool, "100% Pure", "Percent").await;
    insert_song(&pool, "1000 Pure", "Digits").await;
    insert_song(&pool, "snake_case", "Under").await;
    insert_song(&pool, "snakeXcase", "Letter").await;
    insert_song(&pool, "back\\slash", "Escape").await;
    let store = PgStore::new(pool);

    assert_eq!(titles(&store.search("100%").await.unwrap()), ["100% Pure"]);
    assert_eq!(titles(&store.search("e_c").await.unwrap()), ["snake_case"]);
    assert_eq!(titles(&store.search("k\\s").await.unwrap()), ["back\\slash"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_library_filters_by_kind_and_query(pool: PgPool) {
    let store = PgStore::new(pool);

    let all = store.library(LibraryFilter::All, "").await.unwrap();
    assert_eq!(
        titles(&all),
        ["Liked Songs", "Summer Hits", "Dark Side of the Moon", "The Weeknd"]
    );

    let playlists = store.library(LibraryFilter::Playlists, "hits").await.unwrap();
    assert_eq!(titles(&playlists), ["Summer Hits"]);
    assert_eq!(playlists[0].kind, TrackKind::Playlist);

    let artists = store.library(LibraryFilter::Artists, "").await.unwrap();
    assert_eq!(titles(&artists), ["The Weeknd"]);
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_removals_floor_at_zero(pool: PgPool) {
    let store = PgStore::new(pool);

    let track = store
        .apply_reaction(1, ReactionAction::RemoveLike)
        .await
        .unwrap()
        .expect("seeded track should exist");
    assert_eq!(track.likes, 0);

    store.apply_reaction(1, ReactionAction::Like).await.unwrap();
    store.apply_reaction(1, ReactionAction::RemoveLike).await.unwrap();
    let track = store
        .apply_reaction(1, ReactionAction::RemoveLike)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(track.likes, 0);

    let track = store
        .apply_reaction(1, ReactionAction::RemoveDislike)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(track.dislikes, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_like_then_switch_to_dislike(pool: PgPool) {
    let store = PgStore::new(pool);

    store.apply_reaction(2, ReactionAction::Like).await.unwrap();
    store.apply_reaction(2, ReactionAction::RemoveLike).await.unwrap();
    let track = store
        .apply_reaction(2, ReactionAction::Dislike)
        .await
        .unwrap()
        .unwrap();

    assert_eq!((track.likes, track.dislikes), (0, 1));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_counters_on_unknown_track_are_none(pool: PgPool) {
    let store = PgStore::new(pool);

    assert!(store
        .apply_reaction(9999, ReactionAction::Like)
        .await
        .unwrap()
        .is_none());
    assert!(store.record_stream(9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_record_stream_increments_by_one(pool: PgPool) {
    let store = PgStore::new(pool);

    store.record_stream(3).await.unwrap();
    let track = store.record_stream(3).await.unwrap().unwrap();
    assert_eq!(track.stream_count, 2);

    let untouched = store.get(1).await.unwrap().unwrap();
    assert_eq!(untouched.stream_count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_fields_and_keeps_comments(pool: PgPool) {
    let store = PgStore::new(pool);
    store.append(&new_comment(4, "keep me")).await.unwrap();

    let mut track = store.get(4).await.unwrap().unwrap();
    track.title = "Blinding Lights (Remix)".to_string();
    track.likes = -5;
    track.comments.clear();

    let updated = store.update(&track).await.unwrap().unwrap();
    assert_eq!(updated.title, "Blinding Lights (Remix)");
    assert_eq!(updated.likes, 0);
    assert_eq!(updated.comments.len(), 1);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_comments_append_in_order(pool: PgPool) {
    let store = PgStore::new(pool);

    let first = store.append(&new_comment(1, "first")).await.unwrap().unwrap();
    let second = store.append(&new_comment(1, "second")).await.unwrap().unwrap();
    assert!(first.id < second.id);
    assert_eq!(first.track_id, 1);

    let listed = store.list_for_track(1).await.unwrap();
    let texts: Vec<_> = listed.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["first", "second"]);

    // Comments travel with the track on every read path.
    let track = store.get(1).await.unwrap().unwrap();
    assert_eq!(track.comments, listed);
    let listed_track = &store.list().await.unwrap()[0];
    assert_eq!(listed_track.comments.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_comment_on_unknown_track_is_none(pool: PgPool) {
    let store = PgStore::new(pool);

    assert_matches!(store.append(&new_comment(9999, "hello?")).await, Ok(None));
    assert!(store.list_for_track(9999).await.unwrap().is_empty());
}
