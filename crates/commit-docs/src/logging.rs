//! Logging setup
//!
//! Log lines go to stdout and are appended to the configured log file, both
//! with timestamp and level. `RUST_LOG` overrides the level chosen by the
//! `--verbose` / `--quiet` flags.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{Config, ConfigError};

/// Build the level filter for a configuration
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(config.log_level().into())
        .from_env_lossy()
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns `ConfigError::LogFile` if the log file cannot be opened.
pub fn init(config: &Config) -> Result<(), ConfigError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| ConfigError::LogFile(config.log_file.clone(), e))?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();

    Ok(())
}
