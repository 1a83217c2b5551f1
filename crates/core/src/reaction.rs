//! Like/dislike aggregation.
//!
//! Counters live on the track; which reaction the viewer currently holds is
//! session-local state ([`ReactionToggle`]) that is not persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which counter a reaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// A single counter mutation, as sent by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionAction {
    Like,
    RemoveLike,
    Dislike,
    RemoveDislike,
}

impl ReactionAction {
    /// Map a toggle of `kind` to an increment (`toggle_on`) or decrement.
    pub fn from_toggle(kind: ReactionKind, toggle_on: bool) -> Self {
        match (kind, toggle_on) {
            (ReactionKind::Like, true) => Self::Like,
            (ReactionKind::Like, false) => Self::RemoveLike,
            (ReactionKind::Dislike, true) => Self::Dislike,
            (ReactionKind::Dislike, false) => Self::RemoveDislike,
        }
    }

    pub fn kind(self) -> ReactionKind {
        match self {
            Self::Like | Self::RemoveLike => ReactionKind::Like,
            Self::Dislike | Self::RemoveDislike => ReactionKind::Dislike,
        }
    }

    pub fn is_removal(self) -> bool {
        matches!(self, Self::RemoveLike | Self::RemoveDislike)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::RemoveLike => "removeLike",
            Self::Dislike => "dislike",
            Self::RemoveDislike => "removeDislike",
        }
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "removeLike" => Ok(Self::RemoveLike),
            "dislike" => Ok(Self::Dislike),
            "removeDislike" => Ok(Self::RemoveDislike),
            other => Err(CoreError::Validation(format!(
                "Invalid action '{other}'. Expected one of: like, removeLike, dislike, removeDislike"
            ))),
        }
    }
}

/// Aggregate like/dislike counters of one track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionCounts {
    pub likes: i64,
    pub dislikes: i64,
}

impl ReactionCounts {
    /// Apply one action. Removals saturate at zero.
    pub fn apply(self, action: ReactionAction) -> Self {
        match action {
            ReactionAction::Like => Self {
                likes: self.likes.saturating_add(1),
                ..self
            },
            ReactionAction::RemoveLike => Self {
                likes: (self.likes - 1).max(0),
                ..self
            },
            ReactionAction::Dislike => Self {
                dislikes: self.dislikes.saturating_add(1),
                ..self
            },
            ReactionAction::RemoveDislike => Self {
                dislikes: (self.dislikes - 1).max(0),
                ..self
            },
        }
    }

    pub fn total(&self) -> i64 {
        self.likes + self.dislikes
    }

    /// Share of likes among all votes, in percent. `0.0` with no votes.
    pub fn like_percentage(&self) -> f64 {
        percentage(self.likes, self.total())
    }

    /// Share of dislikes among all votes, in percent. `0.0` with no votes.
    pub fn dislike_percentage(&self) -> f64 {
        percentage(self.dislikes, self.total())
    }
}

fn percentage(part: i64, total: i64) -> f64 {
    if total > 0 {
        part as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

/// The viewer's own reaction to the track currently open.
///
/// `has_liked` and `has_disliked` are never both set. Callers send the
/// actions from [`plan`](Self::plan) and call [`commit`](Self::commit) only
/// once all of them succeeded, so a failed request leaves the flags as they
/// were.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionToggle {
    has_liked: bool,
    has_disliked: bool,
}

impl ReactionToggle {
    pub fn has_liked(&self) -> bool {
        self.has_liked
    }

    pub fn has_disliked(&self) -> bool {
        self.has_disliked
    }

    /// Actions to send, in order, when the viewer presses `kind`.
    pub fn plan(&self, kind: ReactionKind) -> Vec<ReactionAction> {
        match kind {
            ReactionKind::Like if self.has_liked => vec![ReactionAction::RemoveLike],
            ReactionKind::Like if self.has_disliked => {
                vec![ReactionAction::RemoveDislike, ReactionAction::Like]
            }
            ReactionKind::Like => vec![ReactionAction::Like],
            ReactionKind::Dislike if self.has_disliked => vec![ReactionAction::RemoveDislike],
            ReactionKind::Dislike if self.has_liked => {
                vec![ReactionAction::RemoveLike, ReactionAction::Dislike]
            }
            ReactionKind::Dislike => vec![ReactionAction::Dislike],
        }
    }

    /// Record that the planned actions for `kind` were persisted.
    pub fn commit(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Like => {
                self.has_liked = !self.has_liked;
                self.has_disliked = false;
            }
            ReactionKind::Dislike => {
                self.has_disliked = !self.has_disliked;
                self.has_liked = false;
            }
        }
    }
}
