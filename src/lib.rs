//! # opensocial-web
//!
//! Leptos + WASM frontend for OpenSocial, a community manager for the
//! open social web. Communities live as accounts on a decentralized
//! identity network; this UI talks to the OpenSocial backend for
//! session, membership, moderation, and app-registry operations.
//!
//! This crate contains pages, components, application state, network
//! types, and the pure helpers behind the login round trip: the
//! pending-redirect store, the open-redirect sanitizer, and the
//! community join flow's state machine.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
