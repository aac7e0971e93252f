//! Percolation threshold estimator.
//!
//! Runs `T` trials on an `N × N` grid and prints the threshold mean,
//! standard deviation, and 95% confidence interval.

use anyhow::Context;
use clap::Parser;
use percolation::{PercolationStats, SimulationConfig};
use rand::Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "percolation-stats")]
#[command(about = "Estimate the percolation threshold of an N-by-N grid")]
#[command(version)]
struct Args {
    /// Grid side length N
    #[arg(allow_negative_numbers = true)]
    grid_size: i64,

    /// Number of independent trials T
    #[arg(allow_negative_numbers = true)]
    trials: i64,

    /// Base seed; drawn at random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Decimal places in the report
    #[arg(long, default_value_t = 10)]
    precision: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, "using base seed");

    let config = SimulationConfig::from_signed(args.grid_size, args.trials)
        .context("invalid simulation parameters")?
        .with_seed(seed)
        .with_parallel(args.parallel);
    let stats = PercolationStats::run(&config).context("simulation failed")?;

    print!("{}", report(&stats, args.precision));
    Ok(())
}

fn report(stats: &PercolationStats, precision: usize) -> String {
    [
        ("mean", stats.mean()),
        ("stddev", stats.stddev()),
        ("confidenceLo", stats.confidence_lo()),
        ("confidenceHi", stats.confidence_hi()),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<14}= {value:.precision$}\n"))
    .collect()
}
