// Application state shared by all handlers
// Everything here is read-only after startup

use crate::catalog::Catalog;
use crate::config::Config;
use crate::store::DocumentStore;
use std::sync::Arc;

/// Shared, immutable application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration snapshot taken at startup
    pub config: Config,
    /// Catalog served by `/api/services`
    pub catalog: Catalog,
    /// Document store handle, absent when no database is configured
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    /// Create state from configuration and an optional store handle
    pub fn new(config: Config, store: Option<Arc<dyn DocumentStore>>) -> Self {
        let catalog = Catalog::new(config.catalog.locale);
        Self {
            config,
            catalog,
            store,
        }
    }

    /// Store handle, if one is configured
    pub fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("catalog", &self.catalog.locale())
            .field("store", &self.store.as_ref().and_then(|s| s.name()))
            .finish()
    }
}
