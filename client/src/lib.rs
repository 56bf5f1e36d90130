//! # heavygains-client
//!
//! Leptos + WASM front end for the Heavy Gains coaching platform.
//!
//! Students and trainers each get their own route tree (`/student/{id}/..`,
//! `/trainer/{id}/..`). Both trees sit behind `RoleGuard`, which reads the
//! cached session through the `SessionStore` abstraction and redirects instead
//! of rendering whenever the session is missing, corrupted, or belongs to the
//! other role. All data lives behind the external REST API in `net`.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
