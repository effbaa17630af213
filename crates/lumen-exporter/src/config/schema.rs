use serde::Deserialize;

use lumen_core::error::{LumenError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LumenError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.exporter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.is_empty() {
            return Err(LumenError::Config("exporter.listen must not be empty".into()));
        }
        if !self.metrics_path.starts_with('/') || self.metrics_path.len() < 2 {
            // "/" itself is the redirect route, so the metrics path must be
            // a longer absolute path.
            return Err(LumenError::Config(
                "exporter.metrics_path must be an absolute path other than \"/\"".into(),
            ));
        }
        if !(100..=60000).contains(&self.fetch_timeout_ms) {
            return Err(LumenError::Config(
                "exporter.fetch_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:9288".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
fn default_fetch_timeout_ms() -> u64 {
    5000
}
