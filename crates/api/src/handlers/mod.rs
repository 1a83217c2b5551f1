pub mod account;
pub mod auth;
pub mod catalog;
pub mod comment;
pub mod reaction;

use tunebox_core::error::CoreError;
use tunebox_core::types::{parse_id, DbId};

use crate::error::{AppError, AppResult};

/// Parse a `{track_id}` path segment, rejecting anything but a positive id.
pub(crate) fn parse_track_id(raw: &str) -> AppResult<DbId> {
    parse_id(raw).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!("Invalid track id '{raw}'")))
    })
}

/// The not-found error for an unknown track.
pub(crate) fn track_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Track", id })
}
