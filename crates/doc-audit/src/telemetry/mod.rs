//! Telemetry initialisation for the doc-audit tool.
//!
//! Structured JSON logs to stdout only. Log lines may carry document paths,
//! user ids and algorithm identifiers, never key material.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// `log_level` applies to this binary's own events; dependencies stay at
/// `warn`. `RUST_LOG`, when set, replaces both.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid level or the subscriber has
/// already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(log_level))
            .map_err(|e| anyhow::anyhow!("invalid LOG_LEVEL {log_level:?}: {e}"))?,
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise doc-audit tracing subscriber: {e}"))
}

/// Filter directives used when `RUST_LOG` is absent.
fn default_directives(log_level: &str) -> String {
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), log_level.trim())
}
