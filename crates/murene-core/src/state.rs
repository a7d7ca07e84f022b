//! Simulation State
//!
//! Owns the agents, link weights, scalar accumulators and history, and
//! advances them one step at a time.

use murene_events::{History, StepRecord};
use tracing::{debug, warn};

use crate::components::{Agent, ParameterSet, WeightMatrix, INITIAL_WEIGHT};
use crate::config::Config;
use crate::error::SimResult;
use crate::noise::NoiseSource;
use crate::setup;
use crate::systems;

/// Global drift at construction
pub const INITIAL_DRIFT: f64 = 5.0;
/// Moral debt at construction
pub const INITIAL_DEBT: f64 = 1000.0;
/// Steps performed by a default run
pub const DEFAULT_RUN_STEPS: u64 = 3000;

/// Scalar outputs of a single step, before they are written to history
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: u64,
    /// Empathy field per agent, from pre-step utilities
    pub fields: Vec<f64>,
    /// dD/dt including noise
    pub drift_rate: f64,
    /// Reparations paid this step
    pub repayment: f64,
    pub resonance: f64,
    pub average_utility: f64,
    pub beauty: f64,
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    agents: Vec<Agent>,
    weights: WeightMatrix,
    params: ParameterSet,
    drift: f64,
    debt: f64,
    reparations: f64,
    step_count: u64,
    history: History,
    /// Construction-time population, restored by `reset`
    initial_agents: Vec<Agent>,
    debt_overflow_reported: bool,
}

impl SimulationState {
    /// `num_agents` default agents with the default parameter set
    pub fn new(num_agents: usize) -> SimResult<Self> {
        Self::with_params(num_agents, ParameterSet::default())
    }

    pub fn with_params(num_agents: usize, params: ParameterSet) -> SimResult<Self> {
        let agents = setup::spawn_agents(num_agents)?;
        Ok(Self {
            weights: WeightMatrix::new(num_agents, INITIAL_WEIGHT),
            initial_agents: agents.clone(),
            agents,
            params,
            drift: INITIAL_DRIFT,
            debt: INITIAL_DEBT,
            reparations: 0.0,
            step_count: 0,
            history: History::new(),
            debt_overflow_reported: false,
        })
    }

    /// Build from a loaded configuration, including political flags
    pub fn from_config(config: &Config) -> SimResult<Self> {
        Self::with_params(config.simulation.num_agents, config.params.clone())?
            .with_political(&config.simulation.political_agents)
    }

    /// Flag the agents at `indices` as political. Part of construction:
    /// the flags survive `reset`.
    pub fn with_political(mut self, indices: &[usize]) -> SimResult<Self> {
        setup::mark_political(&mut self.agents, indices)?;
        setup::mark_political(&mut self.initial_agents, indices)?;
        Ok(self)
    }

    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access to the population, for seeding scenarios
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn drift(&self) -> f64 {
        self.drift
    }

    pub fn debt(&self) -> f64 {
        self.debt
    }

    pub fn reparations(&self) -> f64 {
        self.reparations
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn utilities(&self) -> Vec<f64> {
        self.agents.iter().map(|a| a.utility).collect()
    }

    /// Empathy field of agent `i` under the current state
    pub fn empathy_field(&self, i: usize) -> f64 {
        systems::empathy_field(i, &self.agents, &self.weights, &self.params)
    }

    pub fn empathy_fields(&self) -> Vec<f64> {
        systems::empathy_fields(&self.agents, &self.weights, &self.params)
    }

    pub fn mirror_resonance(&self) -> f64 {
        systems::mirror_resonance(&self.agents)
    }

    pub fn average_utility(&self) -> f64 {
        systems::average_utility(&self.agents)
    }

    pub fn safe_sacrifice_term(&self) -> f64 {
        systems::safe_sacrifice_term(&self.agents)
    }

    /// Moral beauty against the current debt and population
    pub fn beauty(&self, neg_drift: f64, resonance: f64, avg_u: f64, e_ext: f64) -> f64 {
        systems::beauty(
            neg_drift,
            resonance,
            avg_u,
            e_ext,
            self.debt,
            &self.agents,
            &self.params,
        )
    }

    /// Advance one step and append it to the history.
    ///
    /// Resonance and average utility are taken before the utility update,
    /// while beauty sees the debt after the debt update.
    pub fn step<N: NoiseSource + ?Sized>(&mut self, noise: &mut N) -> StepOutcome {
        self.step_count += 1;

        let fields = self.empathy_fields();

        let drift_rate = systems::drift_rate(&self.agents, &fields, &self.params, noise.sample());
        self.drift += drift_rate * systems::DRIFT_TIME_STEP;

        systems::update_actions(&mut self.agents, &fields, self.params.r_int);
        systems::update_links(&mut self.weights, &fields, self.params.mu);

        let repayment = systems::repayment(self.debt);
        self.reparations += repayment;
        self.debt = systems::next_debt(self.debt, repayment, &self.params);

        let resonance = self.mirror_resonance();
        let average_utility = self.average_utility();
        let beauty = self.beauty(-drift_rate, resonance, average_utility, 0.0);

        let mean_field = murene_events::mean(&fields);
        systems::update_utilities(&mut self.agents, mean_field);

        self.history.push(StepRecord {
            step: self.step_count,
            beauty,
            debt: self.debt,
            utilities: self.utilities(),
            drift: self.drift,
            reparations: self.reparations,
        });

        if !self.debt.is_finite() && !self.debt_overflow_reported {
            warn!(step = self.step_count, debt = self.debt, "moral debt is no longer finite");
            self.debt_overflow_reported = true;
        }
        debug!(
            step = self.step_count,
            beauty,
            debt = self.debt,
            drift = self.drift,
            "step complete"
        );

        StepOutcome {
            step: self.step_count,
            fields,
            drift_rate,
            repayment,
            resonance,
            average_utility,
            beauty,
        }
    }

    /// Perform `steps` steps in order and return the accumulated history
    pub fn run<N: NoiseSource + ?Sized>(&mut self, steps: u64, noise: &mut N) -> &History {
        for _ in 0..steps {
            self.step(noise);
        }
        &self.history
    }

    /// Restore construction-time state, keeping parameters and political flags
    pub fn reset(&mut self) {
        let n = self.initial_agents.len();
        self.agents = self.initial_agents.clone();
        self.weights = WeightMatrix::new(n, INITIAL_WEIGHT);
        self.drift = INITIAL_DRIFT;
        self.debt = INITIAL_DEBT;
        self.reparations = 0.0;
        self.step_count = 0;
        self.history.clear();
        self.debt_overflow_reported = false;
    }
}
