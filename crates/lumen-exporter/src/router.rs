//! Axum router wiring.
//!
//! Exposes the configured metrics path for scrapes and redirects the root
//! path there.

use axum::{response::Redirect, routing::get, Router};

use crate::{app_state::AppState, scrape};

pub fn build_router(state: AppState) -> Router {
    let metrics_path = state.cfg().exporter.metrics_path.clone();
    let redirect_to = metrics_path.clone();

    Router::new()
        .route(&metrics_path, get(scrape::handle_scrape))
        .route(
            "/",
            get(move || {
                let to = redirect_to.clone();
                async move { Redirect::permanent(&to) }
            }),
        )
        .with_state(state)
}
