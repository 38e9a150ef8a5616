//! API server state

use std::sync::Arc;

use crate::config::AppConfig;
use crate::types::{default_catalog, CatalogEntry};

/// API server state. Immutable once built; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Read-only item catalog
    pub catalog: Arc<[CatalogEntry]>,

    /// Largest `limit` accepted when browsing the catalog
    pub max_page_size: usize,
}

impl AppState {
    pub fn new(catalog: Vec<CatalogEntry>, max_page_size: usize) -> Self {
        Self {
            catalog: catalog.into(),
            max_page_size,
        }
    }

    /// Create state from loaded configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(default_catalog(), config.catalog.max_page_size)
    }

    /// Entries in `[skip, skip + limit)`, clamped to the catalog length
    pub fn catalog_page(&self, skip: usize, limit: usize) -> &[CatalogEntry] {
        let start = skip.min(self.catalog.len());
        let end = start.saturating_add(limit).min(self.catalog.len());
        &self.catalog[start..end]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_page_clamps_to_bounds() {
        let state = AppState::default();
        assert_eq!(state.catalog_page(0, 10).len(), 3);
        assert_eq!(state.catalog_page(1, 1)[0].item_name, "Bar");
        assert!(state.catalog_page(5, 10).is_empty());
        assert_eq!(state.catalog_page(2, usize::MAX).len(), 1);
    }
}
