//! Workspace Documents Frontend Entry Point

mod models;
mod commands;
mod api;
mod config;
mod context;
mod events;
mod toast;
mod feedback;
mod format;
mod actions;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init(config.log_level()) {
        web_sys::console::warn_1(&format!("[Main] {}", e).into());
    }
    log::info!("[Main] Starting, workspace={}", config.workspace_slug);

    mount_to_body(move || view! { <App config=config /> });
}
