//! # client
//!
//! Leptos + WASM frontend for authpad: registration and login against a
//! mock (or HTTP) auth service, a token persisted in `localStorage`, and a
//! guarded dashboard route.
//!
//! This crate contains pages, components, session state, the auth backends
//! and the credential store shared with the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("browser logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
