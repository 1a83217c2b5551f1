//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the session identity from a Bearer token.

pub mod auth;
