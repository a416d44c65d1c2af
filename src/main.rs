//! Drag-and-Drop Lists Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod id_gen;
mod list_pair;
mod logging;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    let (level, level_error) = match config.level_filter() {
        Ok(level) => (level, None),
        Err(err) => (log::LevelFilter::Info, Some(err)),
    };
    if let Err(err) = logging::init(level) {
        web_sys::console::error_1(&err.to_string().into());
    }
    for err in config_error.into_iter().chain(level_error) {
        log::warn!("[CONFIG] {}, using defaults", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
