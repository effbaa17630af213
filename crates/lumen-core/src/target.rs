//! Scrape target normalization.
//!
//! Callers name a device with a `target` query parameter that may be a bare
//! host, a `host:port` pair, or a full `http(s)://` URL. Everything is funneled
//! into one canonical [`Endpoint`] form before the fetch layer ever sees it, so
//! the device transport only deals with well-formed addresses.

use std::fmt;

use url::Url;

use crate::error::{LumenError, Result};

/// Default HTTP port used to communicate with smart-light accessories.
pub const DEFAULT_DEVICE_PORT: u16 = 9123;

/// URL scheme accepted for device endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A canonical device endpoint: scheme, host, and optional explicit port.
///
/// `Display` renders the minimal canonical string `scheme://host[:port]` with
/// no trailing slash, query, or fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: Option<u16>,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme.as_str(), self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// Normalize a caller-supplied target string into a canonical [`Endpoint`].
///
/// A target without a `://` separator is treated as `host` or `host:port`,
/// with [`DEFAULT_DEVICE_PORT`] applied when no port is given. Targets with a
/// scheme must be plain `http`/`https` URLs carrying nothing but a host and an
/// optional port; a bare trailing `/` is tolerated and stripped.
pub fn normalize(raw: &str) -> Result<Endpoint> {
    if !raw.contains("://") {
        return normalize_host_port(raw);
    }
    parse_url(raw)
}

/// Build an endpoint from a string with no URL scheme.
fn normalize_host_port(raw: &str) -> Result<Endpoint> {
    let (host, port) = match raw.rsplit_once(':') {
        Some((host, port)) => {
            // A colon is only acceptable if what follows is a real port.
            let port: u16 = port.parse().map_err(|_| {
                LumenError::InvalidTarget(format!("invalid port in target {raw:?}"))
            })?;
            (host, port)
        }
        None => (raw, DEFAULT_DEVICE_PORT),
    };

    // Assume HTTP, then verify through the URL path so well-formedness has a
    // single source of truth.
    parse_url(&format!("http://{host}:{port}"))
}

/// Parse and validate a scheme-carrying target.
fn parse_url(raw: &str) -> Result<Endpoint> {
    let url = Url::parse(raw)
        .map_err(|e| LumenError::InvalidTarget(format!("unparseable target {raw:?}: {e}")))?;

    let scheme = match url.scheme() {
        "http" => Scheme::Http,
        "https" => Scheme::Https,
        other => {
            return Err(LumenError::InvalidTarget(format!(
                "unsupported scheme {other:?}, expected http or https"
            )))
        }
    };

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => {
            return Err(LumenError::InvalidTarget(format!(
                "target {raw:?} has no host"
            )))
        }
    };

    // A bare trailing slash is equivalent to no path; anything else is not a
    // device address.
    match url.path() {
        "" | "/" => {}
        path => {
            return Err(LumenError::InvalidTarget(format!(
                "target must not carry a path, got {path:?}"
            )))
        }
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(LumenError::InvalidTarget(
            "target must not carry a query or fragment".to_string(),
        ));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(LumenError::InvalidTarget(
            "target must not carry credentials".to_string(),
        ));
    }

    Ok(Endpoint {
        scheme,
        host,
        port: url.port(),
    })
}
