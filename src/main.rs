//! Scenario runner entry point.
//!
//! Usage: `fastscroll-sim <scenario.json> [--config <config.json>]`

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use fastscroll::{AppConfig, AppResult, Scenario};

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fastscroll-sim",
    version,
    about = "Play a fast-scroller scenario against the headless host and print the report"
)]
struct Args {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Configuration JSON file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn run(args: &Args) -> AppResult<()> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_level_filter().as_str()),
    )
    .init();

    let scenario = Scenario::load(&args.scenario)?;
    let report = scenario.run(&config)?;
    if let Some(last) = report.last() {
        log::info!(
            "Scenario finished after {}ms: {:?}, opacity {:.2}",
            last.time_ms,
            last.visibility,
            last.opacity
        );
    }
    println!("{}", report.to_json()?);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Scenario error: {}", e);
        std::process::exit(1);
    }
}

// The runner needs a filesystem and a terminal
#[cfg(target_arch = "wasm32")]
fn main() {}
