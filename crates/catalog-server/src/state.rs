//! Application state shared across handlers.

use std::sync::Arc;

use catalog_store::{CatalogStore, SharedCatalog};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// The book catalog.
    catalog: SharedCatalog,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state around an existing catalog.
    pub fn new(catalog: CatalogStore, config: ServerConfig) -> Self {
        Self {
            catalog: SharedCatalog::new(catalog),
            config: Arc::new(config),
        }
    }

    /// Create application state with the catalog the configuration asks for.
    pub fn from_config(config: ServerConfig) -> Self {
        let catalog = if config.seed_catalog {
            CatalogStore::seeded()
        } else {
            CatalogStore::new()
        };
        Self::new(catalog, config)
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
