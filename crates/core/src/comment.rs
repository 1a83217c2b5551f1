//! Comment ledger records and input validation.
//!
//! Comments are append-only: they are created once through
//! [`NewComment::parse`] plus a store append, never edited or deleted.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{id_string, parse_id, DbId, Timestamp};

/// A comment attached to a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(with = "id_string")]
    pub id: DbId,
    #[serde(with = "id_string")]
    pub track_id: DbId,
    pub text: String,
    pub author: String,
    pub timestamp: Timestamp,
}

/// A validated comment waiting to be appended to a track's ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub track_id: DbId,
    pub author: String,
    pub text: String,
}

impl NewComment {
    /// Validate raw request fields.
    ///
    /// Every field must be present and non-empty after trimming. A track id
    /// that is present but not a valid id is a validation error rather than
    /// a missing field.
    pub fn parse(
        track_id: Option<&str>,
        author: Option<&str>,
        text: Option<&str>,
    ) -> Result<Self, CoreError> {
        let track_id = required(track_id, "trackId")?;
        let author = required(author, "author")?;
        let text = required(text, "text")?;

        let track_id = parse_id(track_id)
            .ok_or_else(|| CoreError::Validation(format!("Invalid track id '{track_id}'")))?;

        Ok(Self {
            track_id,
            author: author.to_string(),
            text: text.to_string(),
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::MissingField(field)),
    }
}
