//! Profile view shapes.

use chrono::Datelike;
use serde::Serialize;

use crate::track::Track;
use crate::types::{id_string, DbId, Timestamp};

/// Image shown for playlists that have no tracks yet.
pub const DEFAULT_PLAYLIST_IMAGE: &str = "/playlist-pic.jpg";

/// Artist label for playlists mixing several artists.
pub const VARIOUS_ARTISTS: &str = "Various Artists";

/// The authenticated user's profile.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub followers: i64,
    pub following: i64,
    pub playlists: Vec<PlaylistSummary>,
}

/// One owned playlist as listed on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistSummary {
    #[serde(with = "id_string")]
    pub id: DbId,
    pub title: String,
    pub artist: String,
    pub tracks: usize,
    pub duration: String,
    pub image: String,
    pub year: i32,
}

impl PlaylistSummary {
    /// Summarize a playlist from its tracks in playlist order.
    pub fn from_tracks(id: DbId, name: &str, created_at: Timestamp, tracks: &[Track]) -> Self {
        let total_secs: i64 = tracks.iter().filter_map(Track::duration_secs).sum();

        let artist = match tracks.split_first() {
            Some((first, rest)) if rest.iter().all(|t| t.artist == first.artist) => {
                first.artist.clone()
            }
            Some(_) => VARIOUS_ARTISTS.to_string(),
            None => String::new(),
        };

        let image = tracks
            .first()
            .map(|t| t.image.clone())
            .unwrap_or_else(|| DEFAULT_PLAYLIST_IMAGE.to_string());

        Self {
            id,
            title: name.to_string(),
            artist,
            tracks: tracks.len(),
            duration: format_total_duration(total_secs),
            image,
            year: created_at.year(),
        }
    }
}

/// Render a playlist length the way the library view shows it:
/// `"1h 30m"` from an hour up, `"42m"` below.
pub fn format_total_duration(total_secs: i64) -> String {
    let minutes = total_secs.max(0) / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
