//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // murene-events = { path = "../murene-events", features = ["test-fixtures"] }
//!
//! use murene_events::fixtures;
//!
//! let history = fixtures::sample_history();
//! ```

use crate::History;

/// Returns a short sample history from the fixtures file.
///
/// Contains the first 3 steps of a default 2-agent run with zero drift
/// noise. Every value is still finite at that point.
pub fn sample_history() -> History {
    let json = include_str!("../tests/fixtures/sample_history.json");
    History::from_json(json).expect("Failed to parse sample_history.json")
}
