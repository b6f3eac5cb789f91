//! Headless Daisyworld driver.
//!
//! Runs the engine for a fixed number of ticks and logs telemetry at a
//! regular interval, optionally printing an ASCII frame of the planet.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use daisy::engine::{DaisyConfig, SimulationEngine};
use daisy::render::ascii_frame;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file; omitted keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Log telemetry every N ticks (0 disables periodic reports)
    #[arg(long, default_value_t = 500)]
    report_every: u64,

    /// Sleep between ticks, in milliseconds
    #[arg(long, default_value_t = 0)]
    tick_interval_ms: u64,

    /// Print an ASCII frame of the grid with each report
    #[arg(long)]
    render: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            DaisyConfig::from_toml_str(&text)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => DaisyConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut engine = SimulationEngine::new(config).context("initializing daisyworld")?;
    report(&engine, args.render);

    let interval = Duration::from_millis(args.tick_interval_ms);
    for _ in 0..args.ticks {
        engine.step();
        if args.report_every > 0 && engine.current_tick().0 % args.report_every == 0 {
            report(&engine, args.render);
        }
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    info!(
        total_us = engine.last_metrics().total_us,
        "{}",
        engine.telemetry()
    );
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn report(engine: &SimulationEngine, render: bool) {
    info!("{}", engine.telemetry());
    if render {
        println!("{}", ascii_frame(engine.grid()));
    }
}
