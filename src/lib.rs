//! # placements-client
//!
//! Leptos + WASM frontend for the Smart Placements Assistance application:
//! a dashboard for placement/company records, a company insights view, and
//! a chatbot page backed by a question-answering endpoint.
//!
//! The crate splits into an endpoint registry plus configured HTTP client
//! (`net`), per-domain page state (`state`), route components (`pages`),
//! and shared view pieces (`components`). Browser-only behavior is gated
//! behind the `hydrate` feature with deterministic non-browser stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
