//! # startease-client
//!
//! Leptos + WASM browser client for the StartEase crowdfunding platform.
//!
//! This crate contains the REST API client, the session store, the route
//! access gate, and the pages and components built on them. All durable
//! state lives behind the remote API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: wire up logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
    log::info!("startease client mounted");
}
