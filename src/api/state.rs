//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::MemoryStore;
use crate::services::{RepositoryManager, RepositoryService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository collection service
    pub repository_service: Arc<dyn RepositoryService>,
}

impl AppState {
    /// Create application state backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(Arc::new(RepositoryManager::new(store)))
    }

    /// Create new application state with a manually injected service.
    pub fn new(repository_service: Arc<dyn RepositoryService>) -> Self {
        Self { repository_service }
    }
}
