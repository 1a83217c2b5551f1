//! Catalog search helpers.
//!
//! Search is a case-insensitive substring match against title OR artist.
//! The in-memory store calls [`matches`] directly; the PostgreSQL store
//! builds an `ILIKE` pattern with [`like_pattern`].
//!
//! The library view narrows non-song entries further with a
//! [`LibraryFilter`].

use std::str::FromStr;

use crate::error::CoreError;
use crate::track::{Track, TrackKind};

/// Whether `track` matches `query`. An empty query matches everything.
pub fn matches(track: &Track, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    track.title.to_lowercase().contains(&needle) || track.artist.to_lowercase().contains(&needle)
}

/// Keep only the tracks matching `query`, preserving order.
pub fn filter_tracks(tracks: Vec<Track>, query: &str) -> Vec<Track> {
    tracks.into_iter().filter(|t| matches(t, query)).collect()
}

/// The library tabs: everything that is not a song, or one kind of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LibraryFilter {
    #[default]
    All,
    Playlists,
    Albums,
    Artists,
}

impl LibraryFilter {
    /// The kinds this filter admits.
    pub fn kinds(self) -> &'static [TrackKind] {
        match self {
            Self::All => &TrackKind::LIBRARY,
            Self::Playlists => &[TrackKind::Playlist],
            Self::Albums => &[TrackKind::Album],
            Self::Artists => &[TrackKind::Artist],
        }
    }

    pub fn admits(self, kind: TrackKind) -> bool {
        self.kinds().contains(&kind)
    }
}

impl FromStr for LibraryFilter {
    type Err = CoreError;

    /// Accepts the tab names (`playlists`) and the singular kinds (`playlist`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(Self::All),
            "playlists" | "playlist" => Ok(Self::Playlists),
            "albums" | "album" => Ok(Self::Albums),
            "artists" | "artist" => Ok(Self::Artists),
            other => Err(CoreError::Validation(format!(
                "Invalid library filter '{other}'. Expected one of: all, playlists, albums, artists"
            ))),
        }
    }
}

/// Library entries admitted by `filter` and matching `query`, preserving order.
pub fn filter_library(tracks: Vec<Track>, filter: LibraryFilter, query: &str) -> Vec<Track> {
    tracks
        .into_iter()
        .filter(|t| filter.admits(t.kind) && matches(t, query))
        .collect()
}

/// Build an `ILIKE` substring pattern, escaping `%`, `_` and `\`.
///
/// ```
/// use tunebox_core::search::like_pattern;
/// assert_eq!(like_pattern("queen"), "%queen%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// ```
pub fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
