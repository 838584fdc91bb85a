// src/main.rs
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vr_bench::report::{compare, ComparisonConfig, DEFAULT_PATHS};
use vr_bench::OptionKind;

#[derive(Parser, Debug)]
#[command(name = "vr-bench")]
#[command(about = "Compare naive, antithetic and control-variate Monte Carlo against Black-Scholes")]
struct Cli {
    /// Number of simulated paths per estimator
    #[arg(short = 'n', long, default_value_t = DEFAULT_PATHS)]
    paths: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Price the put instead of the call
    #[arg(long)]
    put: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("vr_bench={level}")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ComparisonConfig {
        paths: cli.paths,
        seed: cli.seed,
        kind: if cli.put { OptionKind::Put } else { OptionKind::Call },
        ..Default::default()
    };
    config.validate().context("invalid comparison configuration")?;

    let report = compare(&config, &mut config.rng());
    print!("{}", report);
    Ok(())
}
