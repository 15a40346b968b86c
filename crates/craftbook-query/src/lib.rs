//! # Craftbook Query
//!
//! Category search, difficulty filter, material matching, random selection
//! and time estimation over a catalog store.

pub mod engine;
pub mod report;

pub use engine::QueryEngine;
pub use report::{CraftDetails, CraftSummary, TimeLine, TimeReport};
