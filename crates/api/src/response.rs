//! Response envelope types shared by handlers.

use serde::Serialize;
use tunebox_core::profile::Profile;
use tunebox_core::track::Track;

/// `{ "tracks": [...] }` returned by the catalog listing.
#[derive(Debug, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}

/// `{ "items": [...] }` returned by the library view.
#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub items: Vec<Track>,
}

/// `{ "profile": {...} }` returned by the profile view.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// `{ "message": "..." }` for operations with no resource to echo.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
