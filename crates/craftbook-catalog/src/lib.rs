//! # Craftbook Catalog
//!
//! Immutable catalog store with identity lookup and the built-in dataset.

pub mod dataset;
pub mod store;

pub use store::{CatalogStore, InMemoryCatalog};
