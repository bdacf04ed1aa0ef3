//! # sb100-client
//!
//! Leptos + WASM frontend for the Sb100 agricultural-advisory assistant.
//!
//! This crate contains the chat page, its components, conversation and
//! document state, and the request/response handling for the answer
//! service. The host crate renders it on the server (`ssr`); the browser
//! bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
