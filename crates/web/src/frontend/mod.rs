//! Leptos frontend (compiled for WASM only).

pub mod api;
pub mod app;
pub mod components;
pub mod effects;
pub mod pages;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Panics surface in the browser console with a readable backtrace.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
