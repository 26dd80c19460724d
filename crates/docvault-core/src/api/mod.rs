//! Token-authenticated access to the DocVault HTTP API.
//!
//! Every screen talks to the server through [`DocVaultApi`]. The production
//! implementation is [`ApiClient`]; tests substitute a scripted fake.

mod client;

use serde_json::{Map, Value};
use thiserror::Error;

pub use client::{ApiClient, RequestBody};

use crate::models::{
    Address, DashboardSummary, Document, LoginRequest, NewAddress, NewDocument,
    RegistrationRequest, TokenPair, User, UserUpdate,
};
use crate::session::Session;
use crate::util::compact_text;

pub const TOKEN_PATH: &str = "/api/v1/auth/token/";
pub const REGISTER_PATH: &str = "/api/v1/auth/register/";
pub const USER_PATH: &str = "/api/v1/auth/user/";
pub const ADDRESSES_PATH: &str = "/api/v1/addresses/";
pub const DOCUMENTS_PATH: &str = "/api/v1/documents/";
pub const DOCUMENTS_LIST_PATH: &str = "/api/v1/documents/list/";

/// Path of a single address resource.
pub fn address_path(id: i64) -> String {
    format!("{ADDRESSES_PATH}{id}/")
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API configuration: {0}")]
    InvalidConfiguration(String),
    /// No response arrived (network down, CORS, DNS).
    #[error("HTTP request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("API rejected request with HTTP {status}: {}", compact_text(.body))]
    Rejected { status: u16, body: String },
    #[error("Failed to encode request body: {0}")]
    Encode(String),
    #[error("Failed to parse API response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl ApiError {
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Raw body of a rejected response.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Rejected { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Structured field errors, when the rejection body is a JSON object.
    pub fn field_errors(&self) -> Option<Map<String, Value>> {
        match serde_json::from_str::<Value>(self.response_body()?) {
            Ok(Value::Object(fields)) => Some(fields),
            _ => None,
        }
    }

    /// First message found for `fields`, checked in the given order.
    ///
    /// A field may carry a list of messages (only the first is used) or a
    /// single string.
    pub fn first_field_message(&self, fields: &[&str]) -> Option<String> {
        let errors = self.field_errors()?;
        fields
            .iter()
            .filter_map(|field| errors.get(*field))
            .find_map(|value| match value {
                Value::Array(messages) => messages.first().map(message_text),
                Value::String(message) => Some(message.clone()),
                _ => None,
            })
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

/// The remote API as seen by the screens.
///
/// Authenticated calls take the session explicitly; `None` sends the request
/// without credentials and lets the server reject it.
#[allow(async_fn_in_trait)]
pub trait DocVaultApi {
    async fn obtain_token(&self, credentials: &LoginRequest) -> ApiResult<TokenPair>;

    async fn register(&self, request: &RegistrationRequest) -> ApiResult<()>;

    async fn fetch_user(&self, session: Option<&Session>) -> ApiResult<User>;

    async fn update_user(&self, session: Option<&Session>, update: &UserUpdate)
        -> ApiResult<User>;

    async fn list_addresses(&self, session: Option<&Session>) -> ApiResult<Vec<Address>>;

    async fn create_address(
        &self,
        session: Option<&Session>,
        address: &NewAddress,
    ) -> ApiResult<Address>;

    /// Full-record replacement of an existing address.
    async fn replace_address(
        &self,
        session: Option<&Session>,
        address: &Address,
    ) -> ApiResult<Address>;

    async fn upload_document(
        &self,
        session: Option<&Session>,
        document: NewDocument,
    ) -> ApiResult<Document>;

    /// Flat per-document listing (profile screen contract).
    async fn list_documents(&self, session: Option<&Session>) -> ApiResult<Vec<Document>>;

    /// Aggregate listing (dashboard contract) on the same path as
    /// [`DocVaultApi::list_documents`].
    async fn dashboard_summary(&self, session: Option<&Session>) -> ApiResult<DashboardSummary>;
}
