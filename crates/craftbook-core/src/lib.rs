//! # Craftbook Core
//!
//! Core data model and error types for the Craftbook catalog.
//!
//! This crate provides the fundamental building blocks:
//! - [`CraftItem`] - One craft project record
//! - [`Difficulty`] - The closed difficulty vocabulary
//! - [`TimeEstimate`] - Fixed or ranged duration in minutes
//! - [`CraftError`] - Catalog and query error types

pub mod error;
pub mod item;
pub mod types;

// Re-exports for convenience
pub use error::{CraftError, Result};
pub use item::{normalize_material, CraftItem, CraftItemBuilder};
pub use types::{Difficulty, TimeEstimate};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{CraftError, Result};
    pub use crate::item::{CraftItem, CraftItemBuilder};
    pub use crate::types::{Difficulty, TimeEstimate};
}
