//! Client-side form rules, applied before any request is made.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{NewDocument, RegistrationRequest, UploadFile};

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const CONFIRM_REQUIRED: &str = "Confirm your password";
pub const PASSWORDS_MISMATCH: &str = "Passwords must match";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Phone number must be 10 digits";

const PASSWORD_MIN_CHARS: usize = 6;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"))
}

fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("Invalid regex"))
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
    pub phone_number: String,
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegisterForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password1", &"[REDACTED]")
            .field("password2", &"[REDACTED]")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// Per-field messages for the registration form. `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFieldErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password1: Option<&'static str>,
    pub password2: Option<&'static str>,
    pub phone_number: Option<&'static str>,
}

impl RegisterFieldErrors {
    pub const fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password1.is_none()
            && self.password2.is_none()
            && self.phone_number.is_none()
    }
}

/// Checks every registration rule and reports all failing fields at once.
pub fn validate_registration(
    form: &RegisterForm,
) -> Result<RegistrationRequest, RegisterFieldErrors> {
    let errors = RegisterFieldErrors {
        username: form.username.is_empty().then_some(USERNAME_REQUIRED),
        email: check_email(&form.email),
        password1: check_password(&form.password1),
        password2: check_confirmation(&form.password1, &form.password2),
        phone_number: check_phone(&form.phone_number),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(RegistrationRequest {
        username: form.username.clone(),
        email: form.email.clone(),
        password1: form.password1.clone(),
        password2: form.password2.clone(),
        phone_number: form.phone_number.clone(),
    })
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !email_pattern().is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

fn check_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some(CONFIRM_REQUIRED)
    } else if confirmation != password {
        Some(PASSWORDS_MISMATCH)
    } else {
        None
    }
}

fn check_phone(phone_number: &str) -> Option<&'static str> {
    if phone_number.is_empty() {
        Some(PHONE_REQUIRED)
    } else if !phone_pattern().is_match(phone_number) {
        Some(PHONE_INVALID)
    } else {
        None
    }
}

/// Upload form buffer. `size` stays raw text until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub name: String,
    pub description: String,
    pub size: String,
    pub file: Option<UploadFile>,
}

/// Upload form rejections.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Size must be a whole number.")]
    InvalidSize,
}

/// Turns an upload draft into a request, or explains why it cannot be sent.
pub fn validate_document(draft: &DocumentDraft) -> Result<NewDocument, ValidationError> {
    let name = draft.name.trim();
    let description = draft.description.trim();
    let size = draft.size.trim();
    let Some(file) = draft.file.as_ref() else {
        return Err(ValidationError::MissingFields);
    };
    if name.is_empty() || description.is_empty() || size.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let size = size
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidSize)?;

    Ok(NewDocument {
        name: name.to_string(),
        description: description.to_string(),
        size,
        file: file.clone(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::UploadFile;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password1: "secret1".to_string(),
            password2: "secret1".to_string(),
            phone_number: "5551234567".to_string(),
        }
    }

    fn upload_file() -> UploadFile {
        UploadFile {
            file_name: "lease.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = validate_registration(&valid_form()).unwrap();
        assert_eq!(request.username, "ada");
        assert_eq!(request.phone_number, "5551234567");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate_registration(&RegisterForm::default()).unwrap_err();
        assert_eq!(
            errors,
            RegisterFieldErrors {
                username: Some(USERNAME_REQUIRED),
                email: Some(EMAIL_REQUIRED),
                password1: Some(PASSWORD_REQUIRED),
                password2: Some(CONFIRM_REQUIRED),
                phone_number: Some(PHONE_REQUIRED),
            }
        );
    }

    #[test]
    fn five_char_password_is_too_short() {
        let form = RegisterForm {
            password1: "abc12".to_string(),
            password2: "abc12".to_string(),
            ..valid_form()
        };
        let errors = validate_registration(&form).unwrap_err();
        assert_eq!(errors.password1, Some(PASSWORD_TOO_SHORT));
        assert_eq!(errors.password2, None);
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let form = RegisterForm {
            password2: "secret2".to_string(),
            ..valid_form()
        };
        let errors = validate_registration(&form).unwrap_err();
        assert_eq!(errors.password2, Some(PASSWORDS_MISMATCH));
        assert_eq!(errors.password1, None);
    }

    #[test]
    fn email_and_phone_patterns() {
        assert_eq!(check_email("ada@example"), Some(EMAIL_INVALID));
        assert_eq!(check_email("ada example.com"), Some(EMAIL_INVALID));
        assert_eq!(check_email("ada@example.com"), None);

        assert_eq!(check_phone("555123456"), Some(PHONE_INVALID));
        assert_eq!(check_phone("55512345678"), Some(PHONE_INVALID));
        assert_eq!(check_phone("555-123-4567"), Some(PHONE_INVALID));
        assert_eq!(check_phone("5551234567"), None);
    }

    #[test]
    fn document_without_file_is_incomplete() {
        let draft = DocumentDraft {
            name: "Lease".to_string(),
            description: "Signed".to_string(),
            size: "2".to_string(),
            file: None,
        };
        assert_eq!(
            validate_document(&draft),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn document_with_blank_field_is_incomplete() {
        let draft = DocumentDraft {
            name: "Lease".to_string(),
            description: "   ".to_string(),
            size: "2".to_string(),
            file: Some(upload_file()),
        };
        assert_eq!(
            validate_document(&draft),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn document_size_must_be_whole_number() {
        let draft = DocumentDraft {
            name: "Lease".to_string(),
            description: "Signed".to_string(),
            size: "1.5".to_string(),
            file: Some(upload_file()),
        };
        assert_eq!(validate_document(&draft), Err(ValidationError::InvalidSize));
    }

    #[test]
    fn complete_document_is_trimmed() {
        let draft = DocumentDraft {
            name: " Lease ".to_string(),
            description: "Signed".to_string(),
            size: " 2 ".to_string(),
            file: Some(upload_file()),
        };
        let document = validate_document(&draft).unwrap();
        assert_eq!(document.name, "Lease");
        assert_eq!(document.size, 2);
        assert_eq!(document.file.file_name, "lease.pdf");
    }
}
