//! Summary statistics over a recorded history.

use serde::{Deserialize, Serialize};

use crate::history::{mean, History};

/// Min/max/mean of a scalar series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SeriesStats {
    /// Returns `None` for an empty series. NaN entries are skipped by min/max
    /// but propagate into the mean.
    pub fn from_series(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean: mean(values),
        })
    }
}

/// End-of-run overview of a history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub steps: usize,
    pub num_agents: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_beauty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_debt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_drift: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_reparations: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_mean_utility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beauty: Option<SeriesStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_utility: Option<SeriesStats>,
    /// First step (1-based) at which Dm stopped being finite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_overflow_step: Option<u64>,
}

impl HistorySummary {
    pub fn from_history(history: &History) -> Self {
        let last = history.last();
        let mean_utility = history.mean_utility();

        Self {
            steps: history.len(),
            num_agents: history.utilities.first().map(Vec::len).unwrap_or(0),
            final_beauty: last.as_ref().map(|r| r.beauty),
            final_debt: last.as_ref().map(|r| r.debt),
            final_drift: last.as_ref().map(|r| r.drift),
            final_reparations: last.as_ref().map(|r| r.reparations),
            final_mean_utility: last.as_ref().map(|r| r.mean_utility()),
            beauty: SeriesStats::from_series(&history.beauty),
            mean_utility: SeriesStats::from_series(&mean_utility),
            debt_overflow_step: history
                .debt
                .iter()
                .position(|d| !d.is_finite())
                .map(|i| i as u64 + 1),
        }
    }
}
