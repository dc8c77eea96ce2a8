//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ScoreRepository;
use crate::services::ResultCache;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for dataset access
    pub repository: Arc<dyn ScoreRepository>,
    /// TTL cache for statistics and the top-10 ranking
    pub cache: Arc<ResultCache>,
}

impl AppState {
    /// Create a new application state with the default one-hour cache.
    pub fn new(repository: Arc<dyn ScoreRepository>) -> Self {
        Self {
            repository,
            cache: Arc::new(ResultCache::new()),
        }
    }

    /// State with a caller-provided cache; tests use short TTLs.
    pub fn with_cache(repository: Arc<dyn ScoreRepository>, cache: Arc<ResultCache>) -> Self {
        Self { repository, cache }
    }
}
