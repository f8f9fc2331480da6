pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod projections;
pub mod routes;
pub mod shared;
pub mod system;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = shared::config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("{e}; using embedded defaults");
    }
    log::debug!("ui config: {:?}", config);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
