//! Murene empathic simulation core.
//!
//! A fixed population of agents coupled through a weighted influence graph,
//! advanced by a sequence of update rules: empathy field, action, link
//! weights, global drift, moral debt, and the composite moral beauty score.
//!
//! # Example
//!
//! ```
//! use murene_core::{SimRng, SimulationState};
//!
//! let mut state = SimulationState::new(4).unwrap();
//! let history = state.run(100, &mut SimRng::seed_from_u64(42));
//! assert_eq!(history.len(), 100);
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod noise;
pub mod output;
pub mod setup;
pub mod state;
pub mod systems;

pub use components::{Agent, ParameterSet, WeightMatrix};
pub use config::{Config, ConfigError, SimulationConfig};
pub use error::{SimError, SimResult};
pub use noise::{ConstantNoise, NoiseSource, ScriptedNoise, SimRng};
pub use state::{SimulationState, StepOutcome, DEFAULT_RUN_STEPS};

pub use murene_events::{History, HistorySummary, StepRecord};
