//! Lumen core: target normalization, device snapshot types, and the shared
//! error surface.
//!
//! This crate defines the request-scoped value types and the pure functions of
//! the scrape pipeline. It intentionally carries no HTTP client, server, or
//! runtime dependencies so it can be reused and tested without I/O.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `LumenError`/`Result` so a malformed
//! scrape target can never crash the exporter.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod snapshot;
pub mod target;

pub use error::{ErrorKind, LumenError, Result};
pub use snapshot::{Device, DeviceSnapshot, Light};
pub use target::{normalize, Endpoint, Scheme, DEFAULT_DEVICE_PORT};
