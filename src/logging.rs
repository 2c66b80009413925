//! File-backed tracing setup
//!
//! The terminal belongs to the UI, so log output goes to a file.

use crate::config::LogConfig;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

const DEFAULT_LEVEL: Level = Level::DEBUG;

pub fn init(config: &LogConfig) -> Result<()> {
    let parsed = parse_level(&config.level);
    let level = parsed.unwrap_or(DEFAULT_LEVEL);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to initialise logging: {e}"))?;

    tracing::info!(path = %config.path.display(), %level, "logging started");
    if parsed.is_none() {
        tracing::warn!(
            rejected = %config.level,
            fallback = %DEFAULT_LEVEL,
            "unknown log.level in config"
        );
    }
    Ok(())
}

/// Level names as accepted by `tracing` (trace..error, any case, or 1-5)
fn parse_level(name: &str) -> Option<Level> {
    Level::from_str(name.trim()).ok()
}
