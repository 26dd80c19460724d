//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use docvault_core::{ApiClient, Session, SessionStore};

use crate::services::BrowserTokenStorage;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// HTTP client, absent when it could not be constructed
    pub api_client: Signal<Option<Arc<ApiClient>>>,
    /// Token persistence
    pub session_store: Signal<SessionStore<BrowserTokenStorage>>,
}

impl AppState {
    pub fn client(&self) -> Option<Arc<ApiClient>> {
        self.api_client.read().clone()
    }

    pub fn store(&self) -> SessionStore<BrowserTokenStorage> {
        self.session_store.read().clone()
    }

    /// Session read fresh from storage for each request.
    pub fn session(&self) -> Option<Session> {
        self.session_store.read().load()
    }

    /// Download URL for a stored file reference.
    pub fn media_url(&self, file: &str) -> Option<String> {
        self.api_client
            .read()
            .as_ref()
            .map(|client| client.config().media_url(file))
    }
}
