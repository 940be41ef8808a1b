//! # client
//!
//! Leptos + WASM frontend for the charging-station analytics dashboard.
//!
//! This crate contains the session state machine, the identity-provider
//! adapter, route guarding, and the dashboard pages and components. The root
//! `evdash` binary server-renders [`app::App`] with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    leptos::mount::hydrate_body(app::App);
}
