//! Link-weight adaptation ("emotional contagion").

use crate::components::{WeightMatrix, WEIGHT_MAX, WEIGHT_MIN};

/// `W[i,j] += mu · (E[j] - E[i])` for every i != j, then clamp the
/// off-diagonal entries to [WEIGHT_MIN, WEIGHT_MAX].
pub fn update_links(weights: &mut WeightMatrix, fields: &[f64], mu: f64) {
    let n = weights.size();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                weights.add(i, j, mu * (fields[j] - fields[i]));
            }
        }
    }
    weights.clamp_off_diagonal(WEIGHT_MIN, WEIGHT_MAX);
}
