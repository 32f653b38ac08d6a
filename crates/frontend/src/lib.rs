//! Estate Hub - Yew WASM front-end
//!
//! Browser UI for the real-estate listing and booking platform. All
//! business logic lives behind the remote HTTP API; this crate renders
//! the role-specific dashboards and maps user actions to API calls.

mod api;
mod app;
mod components;
mod pages;
mod session;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
