//! Property tests for the step loop.
//!
//! These drive whole runs through the public API and check the invariants
//! that must hold after every step.

use murene_core::components::{Agent, WEIGHT_MAX, WEIGHT_MIN};
use murene_events::fixtures::sample_history;
use murene_core::{
    Config, ConstantNoise, ScriptedNoise, SimError, SimRng, SimulationState, DEFAULT_RUN_STEPS,
};

fn assert_weights_in_range(state: &SimulationState) {
    let weights = state.weights();
    assert!(weights.diagonal().all(|d| d == 0.0), "diagonal changed");
    for (i, j, w) in weights.off_diagonal() {
        assert!(
            (WEIGHT_MIN..=WEIGHT_MAX).contains(&w),
            "W[{},{}] = {} out of range",
            i,
            j,
            w
        );
    }
}

fn assert_utilities_in_range(agents: &[Agent]) {
    for (i, agent) in agents.iter().enumerate() {
        let (lo, hi) = if agent.is_political { (-5.0, 10.0) } else { (0.0, 10.0) };
        assert!(
            agent.utility >= lo && agent.utility <= hi,
            "agent {} utility {} outside [{}, {}]",
            i,
            agent.utility,
            lo,
            hi
        );
    }
}

#[test]
fn test_initial_weights_for_several_sizes() {
    for n in 2..=8 {
        let state = SimulationState::new(n).unwrap();
        assert_eq!(state.weights().size(), n);
        assert!(state.weights().diagonal().all(|d| d == 0.0));
        assert!(state.weights().off_diagonal().all(|(_, _, w)| w == 0.5));
    }
}

#[test]
fn test_invariants_hold_every_step() {
    for seed in [1, 7, 42] {
        let mut state = SimulationState::new(5).unwrap().with_political(&[1, 3]).unwrap();
        let mut rng = SimRng::seed_from_u64(seed);
        for _ in 0..300 {
            state.step(&mut rng);
            assert_weights_in_range(&state);
            assert_utilities_in_range(state.agents());
        }
    }
}

#[test]
fn test_history_lengths() {
    let mut state = SimulationState::new(4).unwrap();
    let history = state.run(0, &mut ConstantNoise(0.0));
    assert!(history.beauty.is_empty());
    assert!(history.debt.is_empty());
    assert!(history.utilities.is_empty());
    assert!(history.drift.is_empty());
    assert!(history.reparations.is_empty());

    let mut state = SimulationState::new(4).unwrap();
    let history = state.run(37, &mut SimRng::seed_from_u64(9));
    assert_eq!(history.beauty.len(), 37);
    assert_eq!(history.debt.len(), 37);
    assert_eq!(history.utilities.len(), 37);
    assert_eq!(history.drift.len(), 37);
    assert_eq!(history.reparations.len(), 37);
    assert!(history.utilities.iter().all(|u| u.len() == 4));
}

#[test]
fn test_default_run_length() {
    let mut state = SimulationState::new(4).unwrap();
    let history = state.run(DEFAULT_RUN_STEPS, &mut SimRng::seed_from_u64(0));
    assert_eq!(history.len(), 3000);
    assert_weights_in_range(&state);
    assert_utilities_in_range(state.agents());
}

#[test]
fn test_same_seed_same_history() {
    let mut a = SimulationState::new(4).unwrap().with_political(&[2]).unwrap();
    let mut b = SimulationState::new(4).unwrap().with_political(&[2]).unwrap();

    let ha = a.run(150, &mut SimRng::seed_from_u64(123)).clone();
    let hb = b.run(150, &mut SimRng::seed_from_u64(123)).clone();

    // compare bit patterns so infinities compare too
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&ha.beauty), bits(&hb.beauty));
    assert_eq!(bits(&ha.debt), bits(&hb.debt));
    assert_eq!(bits(&ha.drift), bits(&hb.drift));
    assert_eq!(bits(&ha.reparations), bits(&hb.reparations));
    assert_eq!(ha.utilities, hb.utilities);
}

#[test]
fn test_different_seed_different_drift() {
    let mut a = SimulationState::new(4).unwrap();
    let mut b = SimulationState::new(4).unwrap();
    let ha = a.run(20, &mut SimRng::seed_from_u64(1)).clone();
    let hb = b.run(20, &mut SimRng::seed_from_u64(2)).clone();
    assert_ne!(ha.drift, hb.drift);
}

#[test]
fn test_reset_then_rerun_reproduces() {
    let mut state = SimulationState::new(3).unwrap();
    let first = state.run(50, &mut SimRng::seed_from_u64(5)).clone();
    state.reset();
    let second = state.run(50, &mut SimRng::seed_from_u64(5)).clone();
    assert_eq!(first.utilities, second.utilities);
    assert_eq!(first.drift, second.drift);
}

#[test]
fn test_first_step_scenario() {
    let mut state = SimulationState::new(4).unwrap();

    let fields = state.empathy_fields();
    assert!(fields.iter().all(|e| e.is_finite() && *e < 0.0));
    assert_eq!(fields[0], fields[1]);
    assert_eq!(fields[1], fields[2]);
    assert_eq!(fields[2], fields[3]);
    assert_eq!(state.mirror_resonance(), 1.0);

    let history = state.run(1, &mut ScriptedNoise::new(vec![0.0]));
    assert!((history.debt[0] - -158990.0).abs() < 1e-6);
    assert_eq!(history.reparations[0], 400.0);
    assert_eq!(history.drift[0], 5.0);
    assert!((history.beauty[0] - 81.495).abs() < 1e-9);
}

#[test]
fn test_debt_diverges_without_nan() {
    let mut state = SimulationState::new(4).unwrap();
    let history = state.run(40, &mut ConstantNoise(0.0));

    let last_debt = *history.debt.last().unwrap();
    assert_eq!(last_debt, f64::NEG_INFINITY);
    assert!(history.beauty.iter().all(|b| !b.is_nan()));
    assert!(history.utilities.iter().flatten().all(|u| u.is_finite()));
}

#[test]
fn test_sacrifice_scenarios() {
    let mut state = SimulationState::new(3).unwrap();
    assert_eq!(state.safe_sacrifice_term(), 0.0);

    state.agents_mut()[0] = Agent::new(-2.0, true, 0.0);
    assert_eq!(state.safe_sacrifice_term(), -2.0);

    state.agents_mut()[1].utility = -1.0;
    assert_eq!(state.safe_sacrifice_term(), 0.0);
}

#[test]
fn test_single_agent_run() {
    let mut state = SimulationState::new(1).unwrap();
    assert_eq!(state.empathy_field(0), -0.0);

    let history = state.run(5, &mut SimRng::seed_from_u64(11));
    assert_eq!(history.len(), 5);
    assert_eq!(state.mirror_resonance(), 1.0);
    assert_eq!(state.utilities(), vec![1.0]);
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        SimulationState::new(0),
        Err(SimError::InvalidArgument(_))
    ));

    let err = SimulationState::new(2).unwrap().with_political(&[2]).unwrap_err();
    assert!(matches!(err, SimError::InvalidArgument(_)));
}

#[test]
fn test_from_config() {
    let config = Config::from_str(
        r#"
        [simulation]
        num_agents = 5
        political_agents = [4]

        [params]
        mu = 0.0
        "#,
    )
    .unwrap();

    let mut state = SimulationState::from_config(&config).unwrap();
    assert_eq!(state.num_agents(), 5);
    assert!(state.agents()[4].is_political);
    assert_eq!(state.params().mu, 0.0);

    state.run(30, &mut SimRng::seed_from_u64(config.simulation.seed));
    // with mu = 0 the links never move
    assert!(state.weights().off_diagonal().all(|(_, _, w)| w == 0.5));
}

#[test]
fn test_sample_fixture_is_a_real_run() {
    let expected = sample_history();
    let mut state = SimulationState::new(2).unwrap();
    let history = state.run(expected.len() as u64, &mut ConstantNoise(0.0));

    let close = |a: &[f64], b: &[f64]| {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(x, y)| (x - y).abs() <= 1e-9 * x.abs().max(y.abs()).max(1.0))
    };
    assert!(close(&history.beauty, &expected.beauty));
    assert!(close(&history.debt, &expected.debt));
    assert!(close(&history.drift, &expected.drift));
    assert!(close(&history.reparations, &expected.reparations));
    for (got, want) in history.utilities.iter().zip(&expected.utilities) {
        assert!(close(got, want));
    }
}
