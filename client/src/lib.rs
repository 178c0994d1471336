//! # client
//!
//! Leptos + WASM frontend for a light/dark mode toggle.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser access is confined to [`util::host`], so the theme
//! state machine in [`state::theme`] runs unchanged in native tests.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
