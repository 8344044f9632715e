//! # admin-console
//!
//! Leptos + WASM admin console: authentication state, route gating, session
//! management, and cache administration against the admin backend.
//!
//! The reactive-free core lives in `state` (auth store, provider, gate
//! machine) and `net` (typed admin API over a pluggable transport). The
//! `components` module bridges that core into Leptos, and `pages` renders it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic and log hooks, then hydrates the
/// server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
