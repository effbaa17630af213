//! Shared error type across Lumen crates.

use thiserror::Error;

/// Stable error classification used at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input / malformed target. Always client-caused.
    BadRequest,
    /// Device fetch failure (network, protocol, deadline exceeded).
    Upstream,
    /// Internal wiring fault (config, registration, encoding).
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Upstream => "UPSTREAM",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LumenError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum LumenError {
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("device fetch failed: {0}")]
    Fetch(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl LumenError {
    /// Map internal error to its stable classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LumenError::InvalidTarget(_) => ErrorKind::BadRequest,
            LumenError::Fetch(_) => ErrorKind::Upstream,
            LumenError::Config(_) => ErrorKind::Internal,
            LumenError::Internal(_) => ErrorKind::Internal,
        }
    }
}
