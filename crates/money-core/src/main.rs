//! Emergent Money Simulation
//!
//! Runs a Kiyotaki-Wright economy and writes its per-period statistics as a
//! JSON run record for later analysis.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use money_core::config::DEFAULT_CONFIG_PATH;
use money_core::output::RECORD_OUTPUT_PATH;
use money_core::{ConfigError, Economy, EconomyConfig};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "money_sim")]
#[command(about = "Simulate the emergence of a medium of exchange")]
struct Args {
    /// Economy configuration (TOML). Defaults are used when absent.
    #[arg(long, conflicts_with = "baseline")]
    config: Option<PathBuf>,

    /// Run the random-agent control experiment instead of a configured economy
    #[arg(long)]
    baseline: bool,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of periods to simulate (overrides the configuration)
    #[arg(long)]
    periods: Option<u64>,

    /// Where to write the run record
    #[arg(long, default_value = RECORD_OUTPUT_PATH)]
    output: PathBuf,

    /// Overwrite an existing run record
    #[arg(short, long)]
    force: bool,
}

fn load_config(args: &Args) -> Result<EconomyConfig, ConfigError> {
    let mut config = match &args.config {
        None if args.baseline => EconomyConfig::random_baseline(),
        Some(path) => EconomyConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            EconomyConfig::from_file(DEFAULT_CONFIG_PATH)?
        }
        None => EconomyConfig::default(),
    };
    if let Some(periods) = args.periods {
        config.t_max = periods;
    }
    Ok(config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.output.exists() && !args.force {
        warn!(
            "Run record {} already exists; pass --force to overwrite it",
            args.output.display()
        );
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Could not load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(seed = args.seed, "Emergent money simulation");

    let economy = match Economy::new(config, args.seed) {
        Ok(economy) => economy,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let record = economy.into_record(args.seed);

    if let Some(last) = record.periods.last() {
        info!(
            consumption = last.consumption,
            exchanges = last.n_exchanges,
            "final period"
        );
        if let Some(good) = last.leading_medium() {
            info!("Most accepted medium of exchange: {}", good);
        }
    }

    if let Err(e) = record.write_to(&args.output) {
        error!("Could not write run record: {}", e);
        return ExitCode::FAILURE;
    }
    info!("Wrote {}", args.output.display());

    ExitCode::SUCCESS
}
