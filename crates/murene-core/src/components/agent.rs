//! Agent Components
//!
//! A single agent: scalar utility, accumulated action, political flag.

use serde::{Deserialize, Serialize};

/// Utility every agent starts with
pub const INITIAL_UTILITY: f64 = 1.0;

/// Upper utility bound, shared by all agents
pub const UTILITY_MAX: f64 = 10.0;
/// Lower utility bound for non-political agents
pub const UTILITY_MIN: f64 = 0.0;
/// Lower utility bound for political agents
pub const POLITICAL_UTILITY_MIN: f64 = -5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub utility: f64,
    pub is_political: bool,
    pub action: f64,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            utility: INITIAL_UTILITY,
            is_political: false,
            action: 0.0,
        }
    }
}

impl Agent {
    pub fn new(utility: f64, is_political: bool, action: f64) -> Self {
        Self {
            utility,
            is_political,
            action,
        }
    }

    /// Utility range the agent is clamped to after each step
    pub fn utility_bounds(&self) -> (f64, f64) {
        if self.is_political {
            (POLITICAL_UTILITY_MIN, UTILITY_MAX)
        } else {
            (UTILITY_MIN, UTILITY_MAX)
        }
    }

    /// Clamp utility into the bounds for this agent's flag.
    /// NaN is left as NaN.
    pub fn clamp_utility(&mut self) {
        let (lo, hi) = self.utility_bounds();
        self.utility = self.utility.clamp(lo, hi);
    }

    pub fn is_within_bounds(&self) -> bool {
        let (lo, hi) = self.utility_bounds();
        (lo..=hi).contains(&self.utility)
    }
}
