use leptos::*;
use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

pub use app::App;
pub use config::AppConfig;

/// Install the console logger and browser clock.
pub fn init_services() {
    #[cfg(debug_assertions)]
    let console_logger = infrastructure::services::ConsoleLogger::new_development();
    #[cfg(not(debug_assertions))]
    let console_logger = infrastructure::services::ConsoleLogger::new_production();

    domain::logging::install_logger(Box::new(console_logger));
    domain::logging::install_clock(Box::new(infrastructure::services::BrowserClock::new()));
}

/// Browser entry point: set up logging, resolve the config and mount the dashboard.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    init_services();

    let config = AppConfig::load();
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Dashboard starting, polling every {} ms", config.poll_interval_ms),
    );

    mount_to_body(move || view! { <App config=config.clone() /> });
}
