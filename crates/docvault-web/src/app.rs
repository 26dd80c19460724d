//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use docvault_core::{ApiClient, ClientConfig, SessionStore};

use crate::bootstrap_config::load_bootstrap_config;
use crate::route::Route;
use crate::services::BrowserTokenStorage;
use crate::state::AppState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn build_client() -> Result<ApiClient, String> {
    let bootstrap = load_bootstrap_config();
    let config = ClientConfig::from_optional(bootstrap.api_base_url).unwrap_or_else(|error| {
        tracing::error!("Invalid API base URL, using default: {}", error);
        ClientConfig::default()
    });
    tracing::info!("Using API at {}", config.api_base_url());
    ApiClient::new(config).map_err(|error| {
        tracing::error!("Failed to initialize API client: {}", error);
        error.to_string()
    })
}

/// Root application component
#[component]
pub fn App() -> Element {
    let initial_client = use_hook(build_client);
    let api_client = use_signal(|| initial_client.clone().ok().map(Arc::new));
    let init_error = initial_client.err();
    let session_store = use_signal(|| SessionStore::new(BrowserTokenStorage::default()));

    use_context_provider(|| AppState {
        api_client,
        session_store,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        if let Some(error) = init_error {
            div {
                class: "app-error",
                "{error}"
            }
        } else {
            Router::<Route> {}
        }
    }
}
