//! # budget-client
//!
//! Leptos + WASM front end for the budget tracker web app. Replaces the
//! hand-written `static/main.js` page glue with a Rust-native UI layer.
//!
//! This crate owns the page chrome — navigation bar with a mobile menu,
//! theme switch, logout link, and flash banners — plus the state machines
//! behind it. Page content is server-rendered; the chrome hydrates around
//! it and degrades per behavior when a piece of markup is absent.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
