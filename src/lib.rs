//! # datadesk-client
//!
//! Leptos + WASM frontend for the data-request case-management application.
//!
//! The crate is split the same way the routes are: `pages` own route-level
//! orchestration, `components` render shared pieces, `state` holds the
//! session context, `net` speaks HTTP to the backend, and `util` wraps the
//! browser storage glue.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
