//! # client
//!
//! Leptos + WASM frontend for the MRT outcome-prediction dashboard.
//!
//! This crate contains pages, components, application state, network types,
//! and the session/authorization gate. The ML backend (training, inference,
//! feature importance) is external; everything here talks to it through the
//! server crate's `/api` and `/nn` proxy routes.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
