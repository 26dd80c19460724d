use serde::{Deserialize, Serialize};

/// The signed-in account as returned by `/api/v1/auth/user/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub pk: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    /// Phone number for display; empty when the account has none.
    pub fn phone_display(&self) -> &str {
        self.phone_number.as_deref().unwrap_or_default()
    }
}

/// Partial profile update. Email is read-only server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub username: String,
    pub phone_number: String,
}
