//! Configuration loading and validation for the doc-audit tool.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated doc-audit configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the `*.json` profile documents to check. **Required.**
    pub document_dir: String,

    /// Stop at the first rejected document instead of checking them all.
    #[serde(default)]
    pub fail_fast: bool,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build doc-audit configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise doc-audit configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.document_dir.trim().is_empty() {
            anyhow::bail!("DOCUMENT_DIR is required and must not be empty");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}
