//! # talentboard
//!
//! Leptos + WASM front-end for the Talentboard HR portal. This crate holds
//! the client-side session & route-guard subsystem: the persisted
//! credential record, the session service and its 401→refresh→retry
//! pipeline, the cookie-session reconciliation, the navigation guard, and
//! the onboarding wizard draft — plus thin pages wiring them together.
//!
//! Everything that makes decisions is plain Rust behind small seams
//! (`StorageBackend`, `HttpClient`, an explicit clock) so it tests
//! natively; browser specifics live behind the `hydrate` feature.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log forwarding and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
