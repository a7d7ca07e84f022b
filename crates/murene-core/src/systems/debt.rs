//! Moral debt repayment.

use crate::components::ParameterSet;

/// Fraction of the current debt paid as reparations each step
pub const REPAYMENT_FRACTION: f64 = 0.4;

/// Reparations paid this step, from the debt before the update
pub fn repayment(debt: f64) -> f64 {
    REPAYMENT_FRACTION * debt
}

/// `Dm · (1 - rho · R_step) + gamma_ext · P_ext`
///
/// No guard against overflow: with the default constants the debt changes
/// sign on the first step and reaches -inf within about ten steps.
pub fn next_debt(debt: f64, r_step: f64, params: &ParameterSet) -> f64 {
    debt * (1.0 - params.rho * r_step) + params.gamma_ext * params.p_ext
}
