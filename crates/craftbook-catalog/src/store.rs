//! Catalog store implementations.

use std::collections::HashMap;

use craftbook_core::{CraftError, CraftItem, Result};

use crate::dataset;

/// Trait for catalog stores.
///
/// A store is read-only once constructed, so implementations are shared
/// across callers without locking.
pub trait CatalogStore: Send + Sync {
    /// Get the item with exactly this id.
    fn get(&self, id: &str) -> Result<&CraftItem>;

    /// All items, in insertion order.
    fn all(&self) -> &[CraftItem];

    /// Number of items in the catalog.
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Returns true if the catalog has no items.
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Returns true if an item with this id exists.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }
}

/// In-memory implementation of CatalogStore.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    /// Items in insertion order.
    items: Vec<CraftItem>,

    /// id -> position in `items`.
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Create a catalog from items, normalizing and validating each one.
    ///
    /// Fails on the first invalid item or duplicate id.
    pub fn new(items: impl IntoIterator<Item = CraftItem>) -> Result<Self> {
        let mut catalog = Self::default();

        for item in items {
            let item = item.normalized();
            item.validate()?;

            if catalog.index.contains_key(&item.id) {
                return Err(CraftError::invalid_catalog(format!(
                    "duplicate craft id '{}'",
                    item.id
                )));
            }

            catalog.index.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(item);
        }

        tracing::info!("Loaded catalog with {} crafts", catalog.items.len());

        Ok(catalog)
    }

    /// Create a catalog from a JSON array of craft items.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<CraftItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Create a catalog holding the built-in sample dataset.
    pub fn sample() -> Result<Self> {
        Self::new(dataset::sample_items()?)
    }

    /// Create a catalog with no items.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn get(&self, id: &str) -> Result<&CraftItem> {
        self.index
            .get(id)
            .map(|&pos| &self.items[pos])
            .ok_or_else(|| CraftError::not_found(id))
    }

    fn all(&self) -> &[CraftItem] {
        &self.items
    }
}
