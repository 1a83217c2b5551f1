//! Row models and DTOs, one module per table.

pub mod comment;
pub mod playlist;
pub mod track;
pub mod user;
