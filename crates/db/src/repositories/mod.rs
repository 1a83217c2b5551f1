//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod playlist_repo;
pub mod track_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use playlist_repo::PlaylistRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
