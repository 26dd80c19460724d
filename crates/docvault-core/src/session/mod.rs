//! Bearer token persistence.
//!
//! Tokens live in a flat key/value backend (browser `localStorage` in the web
//! app). `SessionStore` is the only writer, so callers never touch raw keys.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// The two opaque credentials issued at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub const ALL: [Self; 2] = [Self::Access, Self::Refresh];

    /// Fixed key the token is stored under.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Access => "accessToken",
            Self::Refresh => "refreshToken",
        }
    }
}

/// Credentials attached to authenticated API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Raw key/value backend for tokens.
pub trait TokenStorage: Clone + 'static {
    fn read(&self, key: &str) -> SessionResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> SessionResult<()>;
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// In-process token backend, used by tests and non-browser builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryTokenStorage {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> SessionResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|error| SessionError::Storage(error.to_string()))
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> SessionResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Session lifecycle: written at login, read before each request, cleared at logout.
#[derive(Debug, Clone)]
pub struct SessionStore<S: TokenStorage> {
    storage: S,
}

impl<S: TokenStorage> SessionStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save(&self, access: &str, refresh: &str) -> SessionResult<()> {
        self.storage.write(TokenKind::Access.storage_key(), access)?;
        self.storage.write(TokenKind::Refresh.storage_key(), refresh)?;
        tracing::debug!("Session tokens saved");
        Ok(())
    }

    pub fn get(&self, kind: TokenKind) -> SessionResult<Option<String>> {
        self.storage.read(kind.storage_key())
    }

    /// Returns the stored session when both tokens are present.
    ///
    /// A lone access token does not count: requests built from this session
    /// go out without a bearer header until both tokens are saved again.
    /// [`get`](Self::get) still returns each token individually. Storage
    /// failures are logged and treated as signed out.
    pub fn load(&self) -> Option<Session> {
        let read = |kind: TokenKind| match self.get(kind) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("Failed to read {}: {}", kind.storage_key(), error);
                None
            }
        };

        match (read(TokenKind::Access), read(TokenKind::Refresh)) {
            (Some(access_token), Some(refresh_token)) => Some(Session {
                access_token,
                refresh_token,
            }),
            (None, None) => None,
            _ => {
                tracing::warn!("Ignoring partially stored session");
                None
            }
        }
    }

    pub fn clear(&self) -> SessionResult<()> {
        for kind in TokenKind::ALL {
            self.storage.remove(kind.storage_key())?;
        }
        tracing::debug!("Session tokens cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore<MemoryTokenStorage> {
        SessionStore::new(MemoryTokenStorage::default())
    }

    #[test]
    fn save_writes_both_fixed_keys() {
        let store = store();
        store.save("access-1", "refresh-1").unwrap();

        assert_eq!(store.storage().len(), 2);
        assert_eq!(
            store.storage().read("accessToken").unwrap().as_deref(),
            Some("access-1")
        );
        assert_eq!(
            store.get(TokenKind::Refresh).unwrap().as_deref(),
            Some("refresh-1")
        );
    }

    #[test]
    fn load_requires_both_tokens() {
        let store = store();
        assert_eq!(store.load(), None);

        store
            .storage()
            .write(TokenKind::Access.storage_key(), "only-access")
            .unwrap();
        assert_eq!(store.load(), None);
        assert_eq!(
            store.get(TokenKind::Access).unwrap().as_deref(),
            Some("only-access")
        );

        store.save("a", "r").unwrap();
        assert_eq!(
            store.load(),
            Some(Session {
                access_token: "a".to_string(),
                refresh_token: "r".to_string(),
            })
        );
    }

    #[test]
    fn clear_is_idempotent() {
        let store = store();
        store.clear().unwrap();
        store.save("a", "r").unwrap();
        store.clear().unwrap();
        assert!(store.storage().is_empty());
        assert_eq!(store.get(TokenKind::Access).unwrap(), None);
    }

    #[test]
    fn session_debug_redacts_tokens() {
        let session = Session {
            access_token: "secret-access-token".to_string(),
            refresh_token: "secret-refresh-token".to_string(),
        };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-access-token"));
        assert!(!rendered.contains("secret-refresh-token"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
