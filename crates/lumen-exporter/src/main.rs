//! Lumen exporter binary.
//!
//! Serves Prometheus metrics for smart-light accessories. Each scrape request
//! must carry a `target` query parameter naming the device to scrape; if no
//! port is given, the accessory default of 9123 is used.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use lumen_exporter::{app_state, config, fetch, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Config file path is an optional first argument; built-in defaults apply
    // otherwise.
    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path).expect("config load failed"),
        None => config::ExporterConfig::default(),
    };

    let listen: SocketAddr = cfg
        .exporter
        .listen
        .parse()
        .expect("exporter.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg, Box::new(fetch::HttpFetcher::new()))
        .expect("metric registration failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "lumen-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
