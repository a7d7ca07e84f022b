//! Empathy Field
//!
//! Each agent feels the loss and predicted utility of every other agent,
//! weighted by its outgoing link strengths.

use crate::components::{Agent, ParameterSet, WeightMatrix, UTILITY_MAX};

/// Scale of an agent's loss relative to the utility ceiling
pub const LOSS_GRADIENT_SCALE: f64 = 1.5;
/// Fraction of utility used as its own prediction
pub const PREDICTION_SCALE: f64 = 0.1;

/// Loss felt on behalf of an agent with the given utility
pub fn loss_gradient(utility: f64) -> f64 {
    (UTILITY_MAX - utility) * LOSS_GRADIENT_SCALE
}

pub fn prediction(utility: f64) -> f64 {
    utility * PREDICTION_SCALE
}

/// Empathy field of agent `i`:
/// `-Σ_{j≠i} W[i,j] · (loss_gradient(U[j]) + lambda_cog · prediction(U[j]))`
pub fn empathy_field(
    i: usize,
    agents: &[Agent],
    weights: &WeightMatrix,
    params: &ParameterSet,
) -> f64 {
    let row = weights.row(i);
    let field: f64 = agents
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .map(|(j, other)| {
            row[j] * (loss_gradient(other.utility) + params.lambda_cog * prediction(other.utility))
        })
        .sum();
    -field
}

/// Field for every agent, read from the same (unmodified) state
pub fn empathy_fields(agents: &[Agent], weights: &WeightMatrix, params: &ParameterSet) -> Vec<f64> {
    (0..agents.len())
        .map(|i| empathy_field(i, agents, weights, params))
        .collect()
}

/// `action[i] += r_int · E[i]`
pub fn update_actions(agents: &mut [Agent], fields: &[f64], r_int: f64) {
    for (agent, field) in agents.iter_mut().zip(fields) {
        agent.action += r_int * field;
    }
}
