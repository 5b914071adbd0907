use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maze_cli::config::Config;

/// Group-move maze routing solver: reads a problem instance from stdin and
/// prints the optimized wall grid and movement script to stdout.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Deterministic MT19937 seed (overrides MAZE_SEED, default 1).
    #[arg(long)]
    seed: Option<u64>,

    /// Scale factor applied to the annealing wall-clock budget (overrides
    /// MAZE_TIME_SCALE, default 1.0). Use a small value in tests.
    #[arg(long = "time-scale")]
    time_scale: Option<f64>,

    /// Emit tracing spans at debug level for each annealing step.
    #[arg(long)]
    instrument: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.instrument { "maze_cli=info,maze_anneal=trace,maze_core=trace" } else { "maze_cli=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env(cli.seed, cli.time_scale, cli.instrument)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("reading problem instance from stdin")?;

    let output = maze_cli::solve(&input, &config).context("solving problem instance")?;

    io::stdout().write_all(output.as_bytes()).context("writing solution to stdout")?;
    Ok(())
}
