//! Parameter set for the update rules.
//!
//! Field names follow the model's notation when serialized (`H`, `P_ext`,
//! `lambda_debt`, ...), so a TOML `[params]` table reads like the equations.

use serde::{Deserialize, Serialize};

/// Constants driving a run. Immutable once a simulation is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    #[serde(rename = "H")]
    pub h: f64,
    pub gamma_0: f64,
    #[serde(rename = "I")]
    pub i: f64,
    pub k_stress: f64,
    /// Weight of squared mirror resonance in B
    pub beta: f64,
    /// Weight of average utility in B
    pub delta: f64,
    /// Sacrifice weight; the sacrifice term only applies while <= 0.3
    pub epsilon: f64,
    /// Debt penalty in B
    pub lambda_debt: f64,
    /// External empathy penalty in B
    pub zeta: f64,
    /// Weight of neighbour utility prediction in the empathy field
    pub lambda_cog: f64,
    /// Action response to the empathy field
    pub r_int: f64,
    /// Link-weight learning rate
    pub mu: f64,
    /// Drift coupling to empathy-weighted actions
    pub eta_global: f64,
    /// Debt repayment coefficient
    pub rho: f64,
    pub gamma_ext: f64,
    #[serde(rename = "P_ext")]
    pub p_ext: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            h: 10.0,
            gamma_0: 0.8,
            i: 5.0,
            k_stress: 2.0,
            beta: 0.80,
            delta: 1.20,
            epsilon: 0.18,
            lambda_debt: 0.0005,
            zeta: 0.20,
            lambda_cog: 0.7,
            r_int: 0.1,
            mu: 0.05,
            eta_global: 0.1,
            rho: 0.40,
            gamma_ext: 1.0,
            p_ext: 10.0,
        }
    }
}

impl ParameterSet {
    /// All constants as `(name, value)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 16] {
        [
            ("H", self.h),
            ("gamma_0", self.gamma_0),
            ("I", self.i),
            ("k_stress", self.k_stress),
            ("beta", self.beta),
            ("delta", self.delta),
            ("epsilon", self.epsilon),
            ("lambda_debt", self.lambda_debt),
            ("zeta", self.zeta),
            ("lambda_cog", self.lambda_cog),
            ("r_int", self.r_int),
            ("mu", self.mu),
            ("eta_global", self.eta_global),
            ("rho", self.rho),
            ("gamma_ext", self.gamma_ext),
            ("P_ext", self.p_ext),
        ]
    }

    /// Looks a constant up by its model name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}
