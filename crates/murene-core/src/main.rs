//! Murene Empathic Engine
//!
//! Runs the simulation from the command line and prints a report of the
//! four overview series.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use murene_core::output::{render_report, write_run_outputs};
use murene_core::config::DEFAULT_CONFIG_PATH;
use murene_core::{Config, SimResult, SimRng, SimulationState};

/// Steps run when neither --steps nor --config is given
const DEMO_STEPS: u64 = 500;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "murene")]
#[command(about = "Agent-based empathy, debt and moral beauty simulation")]
struct Args {
    /// TOML file with [simulation] and [params] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of agents (overrides the config file)
    #[arg(long)]
    agents: Option<usize>,

    /// Number of steps to simulate [default: 500, or the config file's value]
    #[arg(long)]
    steps: Option<u64>,

    /// Random seed for the drift noise (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated indices of political agents
    #[arg(long, value_delimiter = ',')]
    political: Vec<usize>,

    /// Steps between progress log lines (overrides the config file)
    #[arg(long)]
    report_interval: Option<u64>,

    /// Directory for history.json and series.csv
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("murene=info,murene_core=info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Merge command-line flags over a loaded config. The demo step count is
/// used only when no config file was loaded at all.
fn apply_overrides(loaded: Option<Config>, args: &Args) -> Config {
    let from_file = loaded.is_some();
    let mut config = loaded.unwrap_or_default();

    match args.steps {
        Some(steps) => config.simulation.steps = steps,
        None if !from_file => config.simulation.steps = DEMO_STEPS,
        None => {}
    }
    if let Some(agents) = args.agents {
        config.simulation.num_agents = agents;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(interval) = args.report_interval {
        config.simulation.report_interval = interval;
    }
    if !args.political.is_empty() {
        config.simulation.political_agents = args.political.clone();
    }
    config
}

fn run(args: Args) -> SimResult<()> {
    let loaded = match &args.config {
        Some(path) => Some(Config::from_file(path)?),
        None => Config::load_if_present(DEFAULT_CONFIG_PATH),
    };
    let config = apply_overrides(loaded, &args);

    println!("Murene Empathic Engine");
    println!("======================");
    println!("Agents: {}", config.simulation.num_agents);
    println!("Steps: {}", config.simulation.steps);
    println!("Seed: {}", config.simulation.seed);
    println!();

    let mut state = SimulationState::from_config(&config)?;
    let mut rng = SimRng::seed_from_u64(config.simulation.seed);
    let interval = config.simulation.report_interval;

    info!(
        agents = state.num_agents(),
        steps = config.simulation.steps,
        "starting simulation"
    );
    for _ in 0..config.simulation.steps {
        let outcome = state.step(&mut rng);
        if interval > 0 && outcome.step % interval == 0 {
            info!(
                step = outcome.step,
                beauty = outcome.beauty,
                debt = state.debt(),
                mean_utility = state.average_utility(),
                "progress"
            );
        }
    }
    info!(steps = state.step_count(), "simulation complete");

    println!("{}", render_report(state.history(), state.params()));

    if let Some(dir) = &args.output_dir {
        for path in write_run_outputs(dir, state.history())? {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
