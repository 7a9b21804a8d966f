//! # client
//!
//! Leptos + WASM frontend for the CodeDoc financial services site.
//!
//! Pages, components, and browser glue for the state machines in the
//! `widgets` crate. Browser-only code is gated behind the `csr` feature;
//! without it the crate builds natively and its tests exercise the pure
//! helpers next to each page.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
