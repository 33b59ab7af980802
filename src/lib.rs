//! # portal-client
//!
//! Leptos + WASM frontend for the portal application: a login screen, a
//! registration screen, and a minimal authenticated home screen backed by a
//! REST API.
//!
//! The crate is organized around the client-side session lifecycle. The
//! session store (`util::session_store`) persists the current session, the
//! auth service (`net::api`) performs the remote operations against the
//! `/auth` endpoints, and the auth state (`state::auth`) exposes the
//! reactive signed-in/signed-out view that pages and route guards read.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
