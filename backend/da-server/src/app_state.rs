use crate::CatalogService;

use da_config::{Config, CorsConfig, DatabaseConfig};
use da_db::DocumentStore;

use std::sync::Arc;

/// Shared handler state. Cheap to clone; the store is shared, never copied.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub catalog: CatalogService,
    /// Reported (as set / not set) by the diagnostics endpoint
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: &Config) -> Self {
        Self {
            catalog: CatalogService::new(Arc::clone(&store)),
            store,
            database: config.database.clone(),
            cors: config.cors.clone(),
        }
    }
}
