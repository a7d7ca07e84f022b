//! Shared history types and serialization for the Murene simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the core crate and for anything that consumes
//! simulation output.

pub mod float;
pub mod history;
pub mod summary;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export history types
pub use history::{mean, History, StepRecord};

// Re-export summary types
pub use summary::{HistorySummary, SeriesStats};
