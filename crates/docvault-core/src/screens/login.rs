//! Email/password sign-in.

use std::fmt;

use super::Screen;
use crate::api::DocVaultApi;
use crate::models::LoginRequest;
use crate::session::{Session, SessionStore, TokenStorage};

pub const LOGIN_FAILED: &str = "Invalid credentials. Try again.";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// `Idle -> Submitting -> {Authenticated | Failed}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Failed(String),
}

impl LoginPhase {
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Where to go once this phase is reached.
    pub const fn redirect(&self) -> Option<Screen> {
        match self {
            Self::Authenticated => Some(Screen::Profile),
            _ => None,
        }
    }
}

/// Exchanges credentials for tokens and persists them.
pub async fn sign_in<A, S>(
    api: &A,
    store: &SessionStore<S>,
    form: &LoginForm,
) -> crate::Result<Session>
where
    A: DocVaultApi,
    S: TokenStorage,
{
    let credentials = LoginRequest {
        email: form.email.clone(),
        password: form.password.clone(),
    };
    let tokens = api.obtain_token(&credentials).await?;
    store.save(&tokens.access, &tokens.refresh)?;
    Ok(Session {
        access_token: tokens.access,
        refresh_token: tokens.refresh,
    })
}

/// Runs a login attempt to completion. Every failure collapses into one
/// generic message; the detail only goes to the log.
pub async fn submit_login<A, S>(api: &A, store: &SessionStore<S>, form: &LoginForm) -> LoginPhase
where
    A: DocVaultApi,
    S: TokenStorage,
{
    match sign_in(api, store, form).await {
        Ok(_) => {
            tracing::info!("Signed in as {}", form.email);
            LoginPhase::Authenticated
        }
        Err(error) => {
            tracing::warn!("Login failed: {}", error);
            LoginPhase::Failed(LOGIN_FAILED.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fake::{FakeApi, Failure};
    use crate::session::{MemoryTokenStorage, TokenKind};

    fn form() -> LoginForm {
        LoginForm {
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn successful_login_stores_two_tokens_and_goes_to_profile() {
        let api = FakeApi::default();
        let store = SessionStore::new(MemoryTokenStorage::default());

        let phase = submit_login(&api, &store, &form()).await;

        assert_eq!(phase, LoginPhase::Authenticated);
        assert_eq!(phase.redirect(), Some(Screen::Profile));
        assert_eq!(store.storage().len(), 2);
        assert_eq!(
            store.get(TokenKind::Access).unwrap().as_deref(),
            Some("access-token")
        );
        assert_eq!(
            store.get(TokenKind::Refresh).unwrap().as_deref(),
            Some("refresh-token")
        );
    }

    #[tokio::test]
    async fn rejected_credentials_show_generic_message_and_store_nothing() {
        let api = FakeApi::default();
        api.fail(
            "obtain_token",
            Failure::Rejected(
                401,
                r#"{"detail":"No active account found with the given credentials"}"#.to_string(),
            ),
        );
        let store = SessionStore::new(MemoryTokenStorage::default());

        let phase = submit_login(&api, &store, &form()).await;

        assert_eq!(phase.error(), Some(LOGIN_FAILED));
        assert_eq!(phase.redirect(), None);
        assert!(store.storage().is_empty());
    }

    #[tokio::test]
    async fn network_failure_uses_same_message() {
        let api = FakeApi::default();
        api.fail("obtain_token", Failure::Transport);
        let store = SessionStore::new(MemoryTokenStorage::default());

        let phase = submit_login(&api, &store, &form()).await;

        assert_eq!(phase, LoginPhase::Failed(LOGIN_FAILED.to_string()));
    }

    #[test]
    fn form_debug_redacts_password() {
        assert!(!format!("{:?}", form()).contains("secret1"));
        assert!(LoginPhase::Submitting.is_submitting());
    }
}
