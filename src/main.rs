//! Task List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod guard;
mod models;
mod session;
mod state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Some(level) = config.log_level.to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("logger already set: {}", e).into());
        }
    }
    log::info!("api host: {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
