//! Browser session persistence using `localStorage`.
//!
//! Host builds (tests, tooling) keep tokens in memory instead.

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageTokenStorage as BrowserTokenStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use docvault_core::session::MemoryTokenStorage as BrowserTokenStorage;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use docvault_core::session::{SessionError, SessionResult, TokenStorage};

    /// Token store backed by the page origin's `window.localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorageTokenStorage;

    impl LocalStorageTokenStorage {
        fn storage() -> SessionResult<web_sys::Storage> {
            web_sys::window()
                .ok_or_else(|| SessionError::Storage("window is unavailable".to_string()))?
                .local_storage()
                .map_err(|error| SessionError::Storage(format!("{error:?}")))?
                .ok_or_else(|| SessionError::Storage("localStorage is unavailable".to_string()))
        }
    }

    impl TokenStorage for LocalStorageTokenStorage {
        fn read(&self, key: &str) -> SessionResult<Option<String>> {
            Self::storage()?
                .get_item(key)
                .map_err(|error| SessionError::Storage(format!("{error:?}")))
        }

        fn write(&self, key: &str, value: &str) -> SessionResult<()> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|error| SessionError::Storage(format!("{error:?}")))
        }

        fn remove(&self, key: &str) -> SessionResult<()> {
            Self::storage()?
                .remove_item(key)
                .map_err(|error| SessionError::Storage(format!("{error:?}")))
        }
    }
}
