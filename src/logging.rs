// ABOUTME: Logging configuration and structured logging setup for the FoodLens client
// ABOUTME: Configures env-filtered tracing output for the library and CLI

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with an env-filter
///
/// `RUST_LOG` takes precedence; `default_level` applies when it is unset.
/// Safe to call once per process; a second call returns an error from the
/// global subscriber registry.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
