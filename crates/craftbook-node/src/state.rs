//! Application state.

use std::sync::Arc;

use craftbook_catalog::CatalogStore;
use craftbook_query::QueryEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The query engine over the loaded catalog.
    pub engine: QueryEngine,
}

impl AppState {
    /// Create state serving the given catalog.
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            engine: QueryEngine::new(catalog),
        }
    }
}
