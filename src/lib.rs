//! Browser client for the chat web application.
//!
//! ARCHITECTURE
//! ============
//! `state`, `net` and `util` hold plain logic over the platform traits in
//! `util` and `net::http`, so all of it runs on the host under `cargo test`.
//! `app`, `pages` and `components` are the Leptos view layer. Browser
//! implementations of the platform traits and the WASM entry point are
//! compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod platform;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
