#![allow(non_snake_case)]

pub mod api;
pub mod components;
pub mod config;
pub mod services;
pub mod utils;

mod app;

pub use app::App;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Better panic messages and console logging for WASM
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("starting document chat frontend");

    leptos::mount::mount_to_body(App);
}
