//! Persistence for the tunebox service.
//!
//! - [`repositories`] -- zero-sized repo structs issuing SQL against a `PgPool`.
//! - [`store`] -- the store traits handlers depend on, plus [`StoreError`].
//! - [`pg`] -- [`PgStore`], the PostgreSQL-backed store built on the repos.
//! - [`memory`] -- [`MemoryStore`], a seeded in-memory store for tests and demos.

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod pg;
pub mod repositories;
pub mod store;

pub use memory::MemoryStore;
pub use pg::PgStore;
pub use store::{CatalogStore, CommentStore, StoreError, StoreResult, UserStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
