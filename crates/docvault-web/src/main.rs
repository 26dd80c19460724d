//! DocVault Web Application
//!
//! Browser client for managing a profile, saved addresses and uploaded
//! documents against the DocVault API.

mod app;
mod bootstrap_config;
mod components;
mod route;
mod services;
mod state;
mod views;

fn main() {
    let level = bootstrap_config::parse_bootstrap_config(bootstrap_config::BOOTSTRAP_JSON)
        .map_or_else(
            |_| bootstrap_config::default_log_level(),
            |config| config.log_level(),
        );
    dioxus::logger::init(level).expect("failed to initialize logger");

    tracing::info!("Starting DocVault...");
    dioxus::launch(app::App);
}
