//! The scrape handler.
//!
//! Per-request pipeline, terminal on the first applicable branch:
//! 1. missing/empty `target`        -> 400
//! 2. target fails normalization    -> 400 with the rejection reason
//! 3. fetch error or deadline       -> 500 naming the endpoint and cause
//! 4. success                       -> populate gauges, render, 200

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tokio::time::timeout;

use lumen_core::{normalize, Endpoint, LumenError};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    /// Device address to scrape, in any form accepted by `normalize`.
    #[serde(default)]
    pub target: Option<String>,
}

pub async fn handle_scrape(
    State(app): State<AppState>,
    Query(query): Query<ScrapeQuery>,
) -> Response {
    let Some(raw) = query.target.filter(|t| !t.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "missing target parameter").into_response();
    };

    let endpoint = match normalize(&raw) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            tracing::debug!(target = %raw, error = %e, "rejected scrape target");
            return (
                StatusCode::BAD_REQUEST,
                format!("malformed target parameter: {e}"),
            )
                .into_response();
        }
    };

    // The fetch is bounded by the configured deadline and runs outside the
    // metrics lock, so a slow device never serializes other scrapes.
    let snapshot = match timeout(app.fetch_timeout(), app.fetcher().fetch(&endpoint)).await {
        Ok(Ok(snapshot)) => snapshot,
        Ok(Err(e)) => return fetch_failure(&endpoint, &e),
        Err(_) => {
            let e = LumenError::Fetch(format!(
                "deadline of {:?} exceeded",
                app.fetch_timeout()
            ));
            return fetch_failure(&endpoint, &e);
        }
    };

    // The registry's current values are shared across requests; hold the lock
    // from populate through render so two scrapes cannot interleave values.
    let metrics = app.metrics().lock().await;
    metrics.record_snapshot(&snapshot);
    let body = match metrics.render() {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "metrics rendering failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}")).into_response();
        }
    };
    drop(metrics);

    ([(CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response()
}

fn fetch_failure(endpoint: &Endpoint, e: &LumenError) -> Response {
    tracing::warn!(endpoint = %endpoint, error = %e, "device fetch failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("failed to fetch device data from \"{endpoint}\": {e}"),
    )
        .into_response()
}
