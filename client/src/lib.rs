//! # client
//!
//! Leptos + WASM frontend for the storefront product catalog.
//!
//! This crate contains the catalog page, the product card component, the
//! catalog state model, network types, and the catalog API client. The
//! `storefront` host crate server-renders [`app::shell`] and the browser
//! hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
