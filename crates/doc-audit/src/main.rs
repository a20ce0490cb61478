//! `doc-audit`: checks stored profile documents against the algorithm registry.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`](config::Config) from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Load every `*.json` document in `DOCUMENT_DIR` and report rejections.

mod audit;
mod config;
mod telemetry;

use algorithm::{all_variants, AlgorithmParams};
use anyhow::{Context, Result};
use tracing::debug;

use audit::AuditReport;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = config::Config::from_env().map_err(|e| {
        eprintln!("ERROR: doc-audit configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;

    for alg in all_variants() {
        let AlgorithmParams {
            key_len,
            nonce_len,
            tag_len,
            aead,
        } = alg.params();
        debug!(
            identifier = alg.identifier(),
            code = alg.code(),
            key_len,
            nonce_len,
            tag_len,
            aead,
            "registered algorithm"
        );
    }

    // -----------------------------------------------------------------------
    // 3. Audit
    // -----------------------------------------------------------------------
    let report = audit::run(&cfg).await.context("audit aborted")?;
    ensure_clean(&report)
}

/// Turn a report with rejections into the process error.
fn ensure_clean(report: &AuditReport) -> Result<()> {
    if !report.is_clean() {
        let first = &report.rejected[0];
        anyhow::bail!(
            "{} of {} documents rejected (first: {}: {})",
            report.rejected.len(),
            report.checked(),
            first.path.display(),
            first.error
        );
    }
    Ok(())
}
