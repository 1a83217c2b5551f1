//! Track records as served to clients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::error::CoreError;
use crate::reaction::ReactionCounts;
use crate::types::{id_string, DbId};

/// What a catalog entry is. Songs make up the catalog; the other kinds are
/// library entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    #[default]
    Song,
    Playlist,
    Album,
    Artist,
}

impl TrackKind {
    /// Every non-song kind, in library display order.
    pub const LIBRARY: [TrackKind; 3] = [Self::Playlist, Self::Album, Self::Artist];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Playlist => "playlist",
            Self::Album => "album",
            Self::Artist => "artist",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "song" => Ok(Self::Song),
            "playlist" => Ok(Self::Playlist),
            "album" => Ok(Self::Album),
            "artist" => Ok(Self::Artist),
            other => Err(CoreError::Validation(format!(
                "Invalid track type '{other}'. Expected one of: song, playlist, album, artist"
            ))),
        }
    }
}

/// Lets row models decode the `kind` column directly.
impl TryFrom<String> for TrackKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A playable track with its engagement counters and comment ledger.
///
/// `likes`, `dislikes` and `stream_count` never go below zero; they are
/// only changed through reaction and stream operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(with = "id_string")]
    pub id: DbId,
    pub title: String,
    pub artist: String,
    /// Display duration, e.g. `"5:55"`.
    pub duration: String,
    pub image: String,
    pub audio_url: String,
    #[serde(rename = "type", default)]
    pub kind: TrackKind,
    pub stream_count: i64,
    pub likes: i64,
    pub dislikes: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Track {
    /// Current like/dislike counters.
    pub fn counts(&self) -> ReactionCounts {
        ReactionCounts {
            likes: self.likes,
            dislikes: self.dislikes,
        }
    }

    /// Duration in whole seconds, if the display string parses.
    pub fn duration_secs(&self) -> Option<i64> {
        parse_clock(&self.duration)
    }
}

/// Parse a clock-style duration (`"m:ss"` or `"h:mm:ss"`) into seconds.
///
/// ```
/// use tunebox_core::track::parse_clock;
/// assert_eq!(parse_clock("5:55"), Some(355));
/// assert_eq!(parse_clock("1:02:03"), Some(3723));
/// assert_eq!(parse_clock(""), None);
/// ```
pub fn parse_clock(value: &str) -> Option<i64> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let mut total: i64 = 0;
    for (i, part) in parts.iter().enumerate() {
        let n: i64 = part.parse().ok()?;
        if n < 0 || (i > 0 && n >= 60) {
            return None;
        }
        total = total * 60 + n;
    }
    Some(total)
}
