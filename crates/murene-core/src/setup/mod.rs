//! Setup
//!
//! Population construction for a fresh simulation.

use crate::components::Agent;
use crate::error::{SimError, SimResult};

/// Default population size
pub const DEFAULT_NUM_AGENTS: usize = 4;

/// Summary of a spawned population
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSummary {
    pub total_agents: usize,
    pub political_agents: usize,
}

/// Spawn `num_agents` default agents. An empty population is rejected.
pub fn spawn_agents(num_agents: usize) -> SimResult<Vec<Agent>> {
    if num_agents == 0 {
        return Err(SimError::InvalidArgument(
            "num_agents must be at least 1".to_string(),
        ));
    }
    Ok(vec![Agent::default(); num_agents])
}

/// Flag the agents at `indices` as political
pub fn mark_political(agents: &mut [Agent], indices: &[usize]) -> SimResult<()> {
    if let Some(&bad) = indices.iter().find(|&&i| i >= agents.len()) {
        return Err(SimError::InvalidArgument(format!(
            "political agent index {} out of range for {} agents",
            bad,
            agents.len()
        )));
    }
    for &i in indices {
        agents[i].is_political = true;
    }
    Ok(())
}

pub fn spawn_summary(agents: &[Agent]) -> SpawnSummary {
    SpawnSummary {
        total_agents: agents.len(),
        political_agents: agents.iter().filter(|a| a.is_political).count(),
    }
}
