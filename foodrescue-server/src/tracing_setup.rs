//! Tracing setup for the server binary
//!
//! Usage:
//!   RUST_LOG=foodrescue_server=debug foodrescue   # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                                      # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize console tracing
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
