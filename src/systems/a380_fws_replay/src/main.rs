use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use a380_systems::flight_warning::{FwsConfig, RegistryError};
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use replay::Replay;
use scenario::Scenario;

mod replay;
mod scenario;

/// Replays a scenario of timed cockpit inputs through the A380 flight warning system.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Config {
    /// JSON file containing the frames to replay.
    #[arg(long)]
    scenario: PathBuf,

    /// JSON file overriding the timing constants of the flight warning system.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of a single update in milliseconds.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,
}

#[derive(Debug)]
enum ReplayError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Registry(RegistryError),
}

impl Display for ReplayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(e) => write!(f, "cannot read input: {}", e),
            ReplayError::Json(e) => write!(f, "invalid JSON: {}", e),
            ReplayError::Registry(e) => write!(f, "invalid procedure table: {}", e),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::Io(e)
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(e: serde_json::Error) -> Self {
        ReplayError::Json(e)
    }
}

impl From<RegistryError> for ReplayError {
    fn from(e: RegistryError) -> Self {
        ReplayError::Registry(e)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn main() -> Result<(), ReplayError> {
    let config = Config::parse();
    init_logging();

    let fws_config = match &config.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => FwsConfig::default(),
    };
    let scenario: Scenario = serde_json::from_str(&fs::read_to_string(&config.scenario)?)?;
    info!(
        scenario = %config.scenario.display(),
        frames = scenario.frames.len(),
        "Replaying"
    );

    let mut replay = Replay::new(fws_config, Duration::from_millis(config.tick_ms))?;
    for frame in &scenario.frames {
        replay.run_frame(frame);
    }

    println!("{}", serde_json::to_string_pretty(replay.output())?);
    Ok(())
}
