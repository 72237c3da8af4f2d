//! Far Away Frontend Entry Point

mod browser;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use packing_domain::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_logger::init_logger("FarAway", config.log_level()) {
        web_sys::console::error_1(&e.to_string().into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Ignoring page config: {}", e);
    }

    log::info!("[APP] Mounting {:?}", config.title);
    mount_to_body(move || view! { <App config=config /> });
}
