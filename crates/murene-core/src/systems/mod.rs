//! Update rules applied during a step.
//!
//! Each rule is a free function over the state it reads and writes, so the
//! ordering inside `SimulationState::step` is explicit at the call site.

pub mod beauty;
pub mod debt;
pub mod drift;
pub mod empathy;
pub mod links;
pub mod utility;

pub use beauty::{average_utility, beauty, mirror_resonance, safe_sacrifice_term};
pub use debt::{next_debt, repayment};
pub use drift::{drift_rate, DRIFT_TIME_STEP};
pub use empathy::{empathy_field, empathy_fields, loss_gradient, prediction, update_actions};
pub use links::update_links;
pub use utility::update_utilities;
