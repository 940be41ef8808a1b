//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos SSR app, the hydrate bundle under `/pkg`, and the static
//! page the OAuth popup lands on. The browser talks to the identity provider
//! directly; the host has no auth endpoints of its own.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use client::net::oauth::CALLBACK_PATH;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Landing page for the OAuth popup. The opener reads the URL fragment and
/// closes the window, so the page only needs to exist on the same origin.
pub const CALLBACK_HTML: &str = "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Signing in</title></head>\
<body><p>Completing sign-in. This window will close automatically.</p></body></html>";

/// Routes that do not depend on Leptos configuration.
fn static_routes() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(CALLBACK_PATH, get(oauth_callback))
}

/// Leptos SSR app plus static routes and the `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app() -> Result<(Router, LeptosOptions), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = static_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());
    Ok((app, leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn oauth_callback() -> Html<&'static str> {
    Html(CALLBACK_HTML)
}
