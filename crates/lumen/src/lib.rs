//! Top-level facade crate for Lumen.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use lumen_core::*;
}

pub mod exporter {
    pub use lumen_exporter::*;
}
