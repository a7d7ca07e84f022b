//! Utility update and clamping.

use crate::components::Agent;

/// Utility gained per unit of accumulated action
pub const ACTION_UTILITY_GAIN: f64 = 0.01;
/// Utility gained per unit of mean empathy field
pub const FIELD_UTILITY_GAIN: f64 = 0.005;

/// `U[i] += 0.01·action[i] + 0.005·mean(E)`, then clamp by political flag.
///
/// Expects actions that already include this step's update.
pub fn update_utilities(agents: &mut [Agent], mean_field: f64) {
    for agent in agents.iter_mut() {
        agent.utility += ACTION_UTILITY_GAIN * agent.action + FIELD_UTILITY_GAIN * mean_field;
        agent.clamp_utility();
    }
}
