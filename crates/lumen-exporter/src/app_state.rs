//! Shared application state for the Lumen exporter.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use lumen_core::error::Result;

use crate::config::ExporterConfig;
use crate::fetch::Fetcher;
use crate::metrics::DeviceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    fetcher: Box<dyn Fetcher>,
    metrics: Mutex<DeviceMetrics>,
}

impl AppState {
    /// Build application state. The metric schema is registered here, exactly
    /// once per process; registration failures surface as startup errors.
    pub fn new(cfg: ExporterConfig, fetcher: Box<dyn Fetcher>) -> Result<Self> {
        let metrics = DeviceMetrics::new()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                fetcher,
                metrics: Mutex::new(metrics),
            }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn fetcher(&self) -> &dyn Fetcher {
        self.inner.fetcher.as_ref()
    }

    /// The shared metric registry. Lock it for the full populate-and-render
    /// span of a scrape.
    pub fn metrics(&self) -> &Mutex<DeviceMetrics> {
        &self.inner.metrics
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.inner.cfg.exporter.fetch_timeout_ms)
    }
}
