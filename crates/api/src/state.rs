use std::sync::Arc;

use tunebox_db::{CatalogStore, CommentStore, UserStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Track catalog and engagement counters.
    pub catalog: Arc<dyn CatalogStore>,
    /// Comment ledger.
    pub comments: Arc<dyn CommentStore>,
    /// Identity records and owned playlists.
    pub users: Arc<dyn UserStore>,
    /// Server configuration (read by the auth extractor and handlers).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the state from one store that serves all three roles.
    pub fn from_store<S>(store: Arc<S>, config: ServerConfig) -> Self
    where
        S: CatalogStore + CommentStore + UserStore + 'static,
    {
        Self {
            catalog: store.clone(),
            comments: store.clone(),
            users: store,
            config: Arc::new(config),
        }
    }
}
