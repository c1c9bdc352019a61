//! # console-ui
//!
//! Leptos + WASM frontend for the content admin console.
//!
//! This crate contains the route pages, the session gate and navigation
//! shell, the per-screen UI state machines, and the HTTP seams the browser
//! uses to reach `console-server`. It is compiled twice: with `ssr` into the
//! server binary for HTML rendering, and with `hydrate` into WASM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
