//! BodyMap client crate.
//!
//! ARCHITECTURE
//! ============
//! The crate is compiled twice: once with `ssr` for server-side rendering and
//! once with `hydrate` as the WASM bundle that takes over in the browser.
//! Routing is resolved by `routes::RouteTable`; session identity lives in
//! `state::session` and is provided to the tree by `app::App`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: mount the app onto the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
