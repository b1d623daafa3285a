//! # client
//!
//! Leptos + WASM frontend for the teachers' day greeting board.
//!
//! This crate contains the pages, components, application state, the HTTP
//! client for the remote greetings endpoint, and the browser glue for the
//! clipboard and new-tab navigation. The root `greetings` binary renders it
//! on the server; the `hydrate` feature builds the browser side.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attaches the reactive runtime to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
