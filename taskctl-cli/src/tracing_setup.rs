//! Tracing setup for the taskctl CLI
//!
//! Usage:
//!   taskctl --debug ...                     # Debug logging (includes per-query spans)
//!   RUST_LOG=taskctl_storage=debug taskctl  # Fine-grained log control
//!
//! Logs go to stderr so stdout stays parseable (`--format json`).

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Use `debug` level unless RUST_LOG is set
    pub debug: bool,
}

pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
