//! # client
//!
//! Leptos + WASM frontend for the Homiq property-metering dashboard.
//! Renders buildings, units, meters, and users, and drives the external
//! REST backend; authentication, persistence, and reading ingestion all
//! live on the other side of that API.
//!
//! This crate contains pages, components, application state, the REST
//! layer, and the i18n tables. Pure metering math (measurement grammar,
//! period bucketing) lives in the `metering` crate.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
