//! Metric schema and scrape translation.
//!
//! The gauge set is fixed at compile time and registered once at startup; each
//! scrape overwrites the registry's current values with observations for one
//! device snapshot before rendering them in the Prometheus text format.

pub mod schema;
pub mod translate;

pub use schema::{DeviceMetrics, Gauge};
