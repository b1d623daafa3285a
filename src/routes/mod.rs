//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This binary only hosts the front end: Leptos SSR for every app route
//! (`/`, `/video/{id}`), the compiled WASM/CSS bundle under `/pkg`, and a
//! health probe. Greeting data lives behind the remote endpoint the browser
//! calls directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: static routes + Leptos SSR, with gzip and
/// request tracing on everything.
pub fn app(leptos_options: LeptosOptions, site_root: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    static_routes(site_root)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Health probe and the Leptos build output.
fn static_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
