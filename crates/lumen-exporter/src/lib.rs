//! Lumen exporter library entry.
//!
//! This crate wires the config layer, the device fetch transport, the metric
//! schema, and the scrape handler into a complete Prometheus exporter. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod fetch;
pub mod metrics;
pub mod router;
pub mod scrape;
