//! Tracing initialization for embedding programs and tests.
//!
//! The message macros route through `tracing` whenever `AGENDA_DEBUG` or
//! `RUST_LOG` is set; this helper installs the subscriber that actually
//! renders those events.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs a compact console subscriber honoring `RUST_LOG` (default: info).
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
