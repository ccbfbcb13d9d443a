//! Shopping List Frontend Entry Point

mod catalog;
mod models;
mod filter;
mod search;
mod pipeline;
mod completion;
mod debounce;
mod store;
mod context;
mod config;
mod logger;
mod celebration;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&e.into());
    }

    let config = AppConfig::load();
    log::set_max_level(config.level_filter());
    log::info!("starting with {:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}
