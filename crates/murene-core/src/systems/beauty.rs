//! Moral Beauty
//!
//! Composite score B together with the resonance and sacrifice terms it
//! is built from.

use crate::components::{Agent, ParameterSet};

/// The sacrifice term only applies while epsilon is at or below this value
pub const SACRIFICE_EPSILON_CEILING: f64 = 0.3;

/// Mean of `exp(-|U[i] - U[j]|)` over all ordered pairs, diagonal included.
/// Returns NaN for an empty population.
pub fn mirror_resonance(agents: &[Agent]) -> f64 {
    let n = agents.len();
    let mut total = 0.0;
    for a in agents {
        for b in agents {
            total += (-(a.utility - b.utility).abs()).exp();
        }
    }
    total / (n * n) as f64
}

/// Mean utility, with the empty-input convention of [`murene_events::mean`]
pub fn average_utility(agents: &[Agent]) -> f64 {
    let utilities: Vec<f64> = agents.iter().map(|a| a.utility).collect();
    murene_events::mean(&utilities)
}

/// Cost of political sacrifice.
///
/// The lowest political utility when it is negative and every agent with
/// negative utility is political; 0 otherwise.
pub fn safe_sacrifice_term(agents: &[Agent]) -> f64 {
    let min_political = agents
        .iter()
        .filter(|a| a.is_political)
        .map(|a| a.utility)
        .reduce(f64::min);

    let Some(min_u) = min_political else {
        return 0.0;
    };
    if min_u >= 0.0 {
        return 0.0;
    }
    if agents.iter().any(|a| !a.is_political && a.utility < 0.0) {
        return 0.0;
    }
    min_u
}

/// `neg_drift + beta·M² + delta·avg_u - sacrifice - lambda_debt·Dm - zeta·e_ext`
pub fn beauty(
    neg_drift: f64,
    resonance: f64,
    avg_u: f64,
    e_ext: f64,
    debt: f64,
    agents: &[Agent],
    params: &ParameterSet,
) -> f64 {
    let sacrifice = if params.epsilon <= SACRIFICE_EPSILON_CEILING {
        params.epsilon * safe_sacrifice_term(agents)
    } else {
        0.0
    };

    neg_drift + params.beta * resonance.powi(2) + params.delta * avg_u
        - sacrifice
        - params.lambda_debt * debt
        - params.zeta * e_ext
}
