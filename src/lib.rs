//! # showcase-client
//!
//! Leptos + WASM frontend for the business-showcase mini app embedded in
//! the Telegram WebApp host. Loads content from the backend API, lets an
//! authenticated visitor submit a service request, and exposes an admin
//! view for triaging and exporting leads.
//!
//! The crate builds two ways: with the `csr` feature for the browser
//! (real HTTP calls, host handshake, DOM downloads) and without it for
//! native `cargo test` runs, where browser-only paths are stubbed.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
