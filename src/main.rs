#![allow(warnings)]
//! NutriAI Frontend Entry Point

mod app;
mod components;
mod context;
mod forms;
mod logger;
mod output;

use app::App;
use form_bridge::BridgeConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BridgeConfig::load();
    logger::init(config.log_level);
    log::info!("NutriAI UI starting, backend at {}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}
