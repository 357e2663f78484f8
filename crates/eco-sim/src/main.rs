//! Headless runner for the predator/prey simulation.

mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use eco_core::SimulationConfig;
use eco_world::Simulator;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "eco-sim")]
#[command(about = "Run the predator/prey grid simulation and log population counts")]
struct Cli {
    /// JSON configuration file; defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of steps to run (overrides the config)
    #[arg(short, long)]
    steps: Option<u64>,

    /// Random seed (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.json)?;

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(steps) = cli.steps {
        config.num_steps = steps;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;

    info!(
        depth = config.field.depth,
        width = config.field.width,
        seed = config.seed,
        steps = config.num_steps,
        "Starting eco-sim"
    );

    let mut simulator = Simulator::new(config)?;
    let report = simulator.run_long_simulation()?;

    info!(
        steps = report.steps,
        viable = report.viable,
        census = %report.census,
        "Simulation finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
