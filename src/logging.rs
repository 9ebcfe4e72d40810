//! Logging bootstrap
//!
//! Events go to stderr; stdout carries the MCP protocol. `RUST_LOG` wins
//! over the configured level when it is set.

use anyhow::{Result, anyhow, bail};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const SUPPORTED_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Install the global subscriber
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when a global subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

fn normalize_level(level: &str) -> Result<&'static str> {
    let lower = level.trim().to_ascii_lowercase();
    match SUPPORTED_LEVELS.iter().find(|l| **l == lower.as_str()) {
        Some(l) => Ok(*l),
        None => bail!(
            "unsupported log level '{}'. Valid levels: {}",
            level,
            SUPPORTED_LEVELS.join(", ")
        ),
    }
}
