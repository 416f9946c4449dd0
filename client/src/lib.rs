//! # client
//!
//! Leptos frontend for Lumina, a consumer AI assistant and social platform.
//! Every page renders local mock data; chat, creation and the digital human
//! are simulated with timers and canned responses.
//!
//! The crate is built twice: with `ssr` for the `server` host and with
//! `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and error hooks, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    let _ = console_log::init_with_level(log::Level::Debug);
    util::error_hooks::install();
    leptos::mount::hydrate_body(app::App);
}
