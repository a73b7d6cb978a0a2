use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the
/// configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: soundvault_db::DbPool,
    /// Immutable server configuration.
    pub config: Arc<ServerConfig>,
    /// Uploaded image storage rooted at `config.storage_root`.
    pub images: ImageStore,
}

impl AppState {
    pub fn new(pool: soundvault_db::DbPool, config: ServerConfig) -> Self {
        let images = ImageStore::new(config.storage_root.clone());
        Self {
            pool,
            config: Arc::new(config),
            images,
        }
    }
}
