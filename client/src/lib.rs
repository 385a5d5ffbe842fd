//! # client
//!
//! Leptos + WASM frontend for the Momentum landing page.
//!
//! This crate contains the landing page, its styled components, the
//! validated form inputs, and the plain state types behind them. The
//! `server` crate renders [`app::App`] through `leptos_axum`; the `hydrate`
//! feature builds the browser bundle that takes over the rendered markup.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::console::init();
    leptos::mount::hydrate_body(app::App);
}
