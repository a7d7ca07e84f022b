//! History Types
//!
//! Per-step time series recorded by the simulation.
//!
//! One entry is appended to every series per step, in step order. The
//! serialized keys are `B`, `Dm`, `U`, `D` and `R`.

use serde::{Deserialize, Serialize};

use crate::float;

/// Values recorded at the end of a single step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step index
    pub step: u64,
    /// Moral beauty score B
    pub beauty: f64,
    /// Moral debt Dm after the step's debt update
    pub debt: f64,
    /// Per-agent utility snapshot after the step's utility update
    pub utilities: Vec<f64>,
    /// Global drift D
    pub drift: f64,
    /// Cumulative reparations R
    pub reparations: f64,
}

impl StepRecord {
    /// Mean of the utility snapshot (see [`mean`]).
    pub fn mean_utility(&self) -> f64 {
        mean(&self.utilities)
    }
}

/// Accumulated time series of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(rename = "B", with = "float::series")]
    pub beauty: Vec<f64>,
    #[serde(rename = "Dm", with = "float::series")]
    pub debt: Vec<f64>,
    #[serde(rename = "U", with = "float::rows")]
    pub utilities: Vec<Vec<f64>>,
    #[serde(rename = "D", with = "float::series")]
    pub drift: Vec<f64>,
    #[serde(rename = "R", with = "float::series")]
    pub reparations: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history with room for `steps` entries per series.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            beauty: Vec::with_capacity(steps),
            debt: Vec::with_capacity(steps),
            utilities: Vec::with_capacity(steps),
            drift: Vec::with_capacity(steps),
            reparations: Vec::with_capacity(steps),
        }
    }

    /// Appends one step. Series are extended in the order B, Dm, U, D, R.
    pub fn push(&mut self, record: StepRecord) {
        self.beauty.push(record.beauty);
        self.debt.push(record.debt);
        self.utilities.push(record.utilities);
        self.drift.push(record.drift);
        self.reparations.push(record.reparations);
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.beauty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beauty.is_empty()
    }

    /// Reassembles the record for the step at `index` (0-based).
    pub fn record(&self, index: usize) -> Option<StepRecord> {
        Some(StepRecord {
            step: index as u64 + 1,
            beauty: *self.beauty.get(index)?,
            debt: *self.debt.get(index)?,
            utilities: self.utilities.get(index)?.clone(),
            drift: *self.drift.get(index)?,
            reparations: *self.reparations.get(index)?,
        })
    }

    /// Iterates over all recorded steps in order
    pub fn records(&self) -> impl Iterator<Item = StepRecord> + '_ {
        (0..self.len()).filter_map(move |i| self.record(i))
    }

    pub fn last(&self) -> Option<StepRecord> {
        self.len().checked_sub(1).and_then(|i| self.record(i))
    }

    /// Mean utility per step
    pub fn mean_utility(&self) -> Vec<f64> {
        self.utilities.iter().map(|u| mean(u)).collect()
    }

    /// True when every series has the same length
    pub fn is_consistent(&self) -> bool {
        let n = self.beauty.len();
        self.debt.len() == n
            && self.utilities.len() == n
            && self.drift.len() == n
            && self.reparations.len() == n
    }

    pub fn clear(&mut self) {
        self.beauty.clear();
        self.debt.clear();
        self.utilities.clear();
        self.drift.clear();
        self.reparations.clear();
    }

    /// Serialize to pretty JSON.
    ///
    /// Non-finite values are written as `"inf"`, `"-inf"` or `"NaN"`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Arithmetic mean. An empty slice gives NaN (0/0), which propagates like
/// any other non-finite value; the simulation and the reports share this.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
