#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(all(target_arch = "wasm32", not(debug_assertions)))]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(all(target_arch = "wasm32", debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Trace;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));

    let table = match app::register_routes() {
        Ok(table) => table,
        Err(e) => {
            log::error!("Refusing to mount with an invalid route table: {e}");
            return;
        }
    };
    yew::Renderer::<app::App>::with_props(app::AppProps { table }).render();
}
