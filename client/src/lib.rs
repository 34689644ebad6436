//! # client
//!
//! Leptos + WASM frontend for the Solus Foods "coming soon" landing page.
//!
//! The same components render on the host (`ssr`) and hydrate in the
//! browser (`hydrate`). Everything that touches `web_sys` is gated behind
//! `hydrate`; the logic underneath (theme resolution, countdown arithmetic,
//! waitlist persistence, retry, animation math) is plain Rust and is tested
//! natively.

pub mod app;
pub mod components;
pub mod config;
pub mod events;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and error hooks, then hydrate the SSR
/// markup with [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = config::LandingConfig::get().log_level;
    let _ = console_log::init_with_level(level.to_log_level());
    util::global::install_error_loggers();
    leptos::mount::hydrate_body(app::App);
}
