//! Global drift dynamics.

use crate::components::{Agent, ParameterSet};

/// Integration step applied to dD/dt
pub const DRIFT_TIME_STEP: f64 = 0.1;

/// `dD/dt = -eta_global · Σ E[i]·|action[i]| + noise`
///
/// Actions are read before the step's action update.
pub fn drift_rate(agents: &[Agent], fields: &[f64], params: &ParameterSet, noise: f64) -> f64 {
    let coupling: f64 = fields
        .iter()
        .zip(agents)
        .map(|(e, agent)| e * agent.action.abs())
        .sum();
    -params.eta_global * coupling + noise
}
