//! Application state shared across handlers

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::db::{DbError, DocumentStore};

/// Shared application state
///
/// The store handle is absent when no database was configured or the
/// client could not be built. Record operations then fail with
/// [`DbError::Unavailable`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Option<Arc<dyn DocumentStore>>,
    database: DatabaseConfig,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, database: DatabaseConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, database }),
        }
    }

    /// The store handle, or `DbError::Unavailable` if there is none.
    pub fn store(&self) -> Result<&dyn DocumentStore, DbError> {
        self.inner.store.as_deref().ok_or(DbError::Unavailable)
    }

    pub fn has_store(&self) -> bool {
        self.inner.store.is_some()
    }

    /// Database settings the process started with
    pub fn database_config(&self) -> &DatabaseConfig {
        &self.inner.database
    }

    /// Release the store's resources, if there is a store.
    pub async fn shutdown(&self) {
        if let Some(store) = &self.inner.store {
            store.shutdown().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn absent_store_is_unavailable() {
        let state = AppState::new(None, DatabaseConfig::default());
        assert!(!state.has_store());
        assert!(matches!(state.store(), Err(DbError::Unavailable)));
    }

    #[test]
    fn present_store() {
        let state = AppState::new(Some(Arc::new(MemoryStore::new())), DatabaseConfig::default());
        assert!(state.has_store());
        assert!(state.store().is_ok());
    }
}
