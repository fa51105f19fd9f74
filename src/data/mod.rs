//! Data access layer for soil sample datasets.
//!
//! Loading, unique-value resolution, the equality filter chain and median
//! aggregation. All operations work on an immutable polars DataFrame held
//! for the session lifetime; filtered views are materialized frames.

pub mod loader;
pub mod query;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use loader::load_samples;
pub use query::{filter_samples, unique_values};
pub use stats::edaphic_stats;
