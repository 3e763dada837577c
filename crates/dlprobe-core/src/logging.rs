//! Logging init: stderr only, so stdout carries nothing but the report.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,dlprobe_core=info",
        2 => "info,dlprobe_core=debug",
        _ => "trace",
    }
}

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise the filter comes from `verbosity`.
/// Returns Err if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("dlprobe logging initialized (verbosity {})", verbosity);
    Ok(())
}
