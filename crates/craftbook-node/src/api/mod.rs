//! HTTP adapters over the query engine.

pub mod crafts;
pub mod error;
pub mod health;
pub mod tools;
