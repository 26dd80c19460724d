//! Account registration.

use super::Screen;
use crate::api::{ApiError, DocVaultApi};
pub use crate::validation::RegisterForm;
use crate::validation::{validate_registration, RegisterFieldErrors};

pub const REGISTER_FAILED: &str = "An error occurred. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Server error fields, in the order they are surfaced. Only one is shown.
const ERROR_FIELD_PRIORITY: [&str; 4] = ["non_field_errors", "username", "email", "phone_number"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Blocked locally; no request was sent.
    Invalid(RegisterFieldErrors),
    Registered,
    Failed(String),
}

impl RegisterOutcome {
    pub const fn redirect(&self) -> Option<Screen> {
        match self {
            Self::Registered => Some(Screen::Login),
            _ => None,
        }
    }
}

/// Picks the single message to show for a failed registration.
pub fn failure_message(error: &ApiError) -> String {
    if error.is_transport() {
        return NETWORK_ERROR.to_string();
    }
    error
        .first_field_message(&ERROR_FIELD_PRIORITY)
        .unwrap_or_else(|| REGISTER_FAILED.to_string())
}

/// Validates, then posts the registration.
pub async fn submit_registration<A: DocVaultApi>(api: &A, form: &RegisterForm) -> RegisterOutcome {
    let request = match validate_registration(form) {
        Ok(request) => request,
        Err(errors) => return RegisterOutcome::Invalid(errors),
    };

    match api.register(&request).await {
        Ok(()) => {
            tracing::info!("Registered account {}", request.email);
            RegisterOutcome::Registered
        }
        Err(error) => {
            tracing::warn!("Registration failed: {}", error);
            RegisterOutcome::Failed(failure_message(&error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fake::{FakeApi, Failure};
    use crate::validation::{PASSWORDS_MISMATCH, PASSWORD_TOO_SHORT};

    fn valid_form() -> RegisterForm {
        RegisterForm {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password1: "secret1".to_string(),
            password2: "secret1".to_string(),
            phone_number: "5551234567".to_string(),
        }
    }

    fn rejected(body: &str) -> ApiError {
        ApiError::Rejected {
            status: 400,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn short_password_never_reaches_server() {
        let api = FakeApi::default();
        let form = RegisterForm {
            password1: "abc12".to_string(),
            password2: "abc12".to_string(),
            ..valid_form()
        };

        let outcome = submit_registration(&api, &form).await;

        let RegisterOutcome::Invalid(errors) = outcome else {
            panic!("expected local validation failure");
        };
        assert_eq!(errors.password1, Some(PASSWORD_TOO_SHORT));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn mismatched_passwords_never_reach_server() {
        let api = FakeApi::default();
        let form = RegisterForm {
            password2: "different".to_string(),
            ..valid_form()
        };

        let outcome = submit_registration(&api, &form).await;

        let RegisterOutcome::Invalid(errors) = outcome else {
            panic!("expected local validation failure");
        };
        assert_eq!(errors.password2, Some(PASSWORDS_MISMATCH));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn success_redirects_to_login() {
        let api = FakeApi::default();

        let outcome = submit_registration(&api, &valid_form()).await;

        assert_eq!(outcome, RegisterOutcome::Registered);
        assert_eq!(outcome.redirect(), Some(Screen::Login));
        assert_eq!(api.calls(), vec!["register"]);
    }

    #[tokio::test]
    async fn server_rejection_shows_first_priority_field() {
        let api = FakeApi::default();
        api.fail(
            "register",
            Failure::Rejected(
                400,
                r#"{"phone_number":["Enter a valid phone number."],"email":["A user is already registered with this e-mail address."]}"#
                    .to_string(),
            ),
        );

        let outcome = submit_registration(&api, &valid_form()).await;

        assert_eq!(
            outcome,
            RegisterOutcome::Failed(
                "A user is already registered with this e-mail address.".to_string()
            )
        );
    }

    #[test]
    fn non_field_errors_win_over_field_errors() {
        let error = rejected(
            r#"{"username":["taken"],"non_field_errors":["The password is too similar to the username."]}"#,
        );
        assert_eq!(
            failure_message(&error),
            "The password is too similar to the username."
        );
    }

    #[test]
    fn unrecognised_body_gets_generic_message() {
        assert_eq!(
            failure_message(&rejected(r#"{"password1":["This password is too common."]}"#)),
            REGISTER_FAILED
        );
        assert_eq!(
            failure_message(&rejected("<h1>Server Error (500)</h1>")),
            REGISTER_FAILED
        );
    }

    #[test]
    fn missing_response_gets_network_message() {
        assert_eq!(
            failure_message(&ApiError::Transport("offline".to_string())),
            NETWORK_ERROR
        );
    }
}
