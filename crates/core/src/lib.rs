//! Domain logic for the tunebox streaming service.
//!
//! This crate has no I/O: it holds the track and comment records, the
//! reaction and comment rules, catalog search, profile summaries and the
//! playback controller state machine. The `db` and `api` crates build on it.

pub mod comment;
pub mod error;
pub mod playback;
pub mod profile;
pub mod reaction;
pub mod search;
pub mod track;
pub mod types;
