//! `reqwest`-backed implementation of [`DocVaultApi`].

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    address_path, ApiError, ApiResult, DocVaultApi, ADDRESSES_PATH, DOCUMENTS_LIST_PATH,
    DOCUMENTS_PATH, REGISTER_PATH, TOKEN_PATH, USER_PATH,
};
use crate::config::ClientConfig;
use crate::models::{
    Address, DashboardSummary, Document, LoginRequest, NewAddress, NewDocument,
    RegistrationRequest, TokenPair, User, UserUpdate,
};
use crate::session::Session;

/// Request payload variants accepted by the API.
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// `reqwest` sets `multipart/form-data` with its boundary.
    Multipart(Form),
}

impl RequestBody {
    pub fn json<T: Serialize>(payload: &T) -> ApiResult<Self> {
        serde_json::to_value(payload)
            .map(Self::Json)
            .map_err(|error| ApiError::Encode(error.to_string()))
    }
}

/// HTTP client for the DocVault API. One round trip per call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder().build().map_err(|error| {
            ApiError::InvalidConfiguration(format!("Failed to construct HTTP client: {error}"))
        })?;
        Ok(Self { config, client })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: RequestBody,
    ) -> RequestBuilder {
        tracing::debug!(
            %method,
            path,
            authenticated = session.is_some(),
            "Sending API request"
        );

        let mut request = self
            .client
            .request(method, self.config.api_url(path))
            .header("Accept", "application/json");
        if let Some(session) = session {
            request = request.bearer_auth(&session.access_token);
        }
        match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: RequestBody,
    ) -> ApiResult<Response> {
        let response = self.request(method, path, session, body).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("API request to {} failed with HTTP {}", path, status);
            return Err(ApiError::Rejected { status, body });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: RequestBody,
    ) -> ApiResult<T> {
        let response = self.send(method, path, session, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|error| ApiError::Decode(error.to_string()))
    }
}

impl DocVaultApi for ApiClient {
    async fn obtain_token(&self, credentials: &LoginRequest) -> ApiResult<TokenPair> {
        self.send_json(
            Method::POST,
            TOKEN_PATH,
            None,
            RequestBody::json(credentials)?,
        )
        .await
    }

    async fn register(&self, request: &RegistrationRequest) -> ApiResult<()> {
        self.send(
            Method::POST,
            REGISTER_PATH,
            None,
            RequestBody::json(request)?,
        )
        .await?;
        Ok(())
    }

    async fn fetch_user(&self, session: Option<&Session>) -> ApiResult<User> {
        self.send_json(Method::GET, USER_PATH, session, RequestBody::Empty)
            .await
    }

    async fn update_user(
        &self,
        session: Option<&Session>,
        update: &UserUpdate,
    ) -> ApiResult<User> {
        self.send_json(
            Method::PATCH,
            USER_PATH,
            session,
            RequestBody::json(update)?,
        )
        .await
    }

    async fn list_addresses(&self, session: Option<&Session>) -> ApiResult<Vec<Address>> {
        self.send_json(Method::GET, ADDRESSES_PATH, session, RequestBody::Empty)
            .await
    }

    async fn create_address(
        &self,
        session: Option<&Session>,
        address: &NewAddress,
    ) -> ApiResult<Address> {
        self.send_json(
            Method::POST,
            ADDRESSES_PATH,
            session,
            RequestBody::json(address)?,
        )
        .await
    }

    async fn replace_address(
        &self,
        session: Option<&Session>,
        address: &Address,
    ) -> ApiResult<Address> {
        self.send_json(
            Method::PUT,
            &address_path(address.id),
            session,
            RequestBody::json(address)?,
        )
        .await
    }

    async fn upload_document(
        &self,
        session: Option<&Session>,
        document: NewDocument,
    ) -> ApiResult<Document> {
        let form = document_form(document)?;
        self.send_json(
            Method::POST,
            DOCUMENTS_PATH,
            session,
            RequestBody::Multipart(form),
        )
        .await
    }

    async fn list_documents(&self, session: Option<&Session>) -> ApiResult<Vec<Document>> {
        self.send_json(
            Method::GET,
            DOCUMENTS_LIST_PATH,
            session,
            RequestBody::Empty,
        )
        .await
    }

    async fn dashboard_summary(&self, session: Option<&Session>) -> ApiResult<DashboardSummary> {
        self.send_json(
            Method::GET,
            DOCUMENTS_LIST_PATH,
            session,
            RequestBody::Empty,
        )
        .await
    }
}

fn document_form(document: NewDocument) -> ApiResult<Form> {
    let NewDocument {
        name,
        description,
        size,
        file,
    } = document;

    let mut file_part = Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(content_type) = file.content_type {
        file_part = file_part
            .mime_str(&content_type)
            .map_err(|error| ApiError::Encode(format!("Invalid file content type: {error}")))?;
    }

    Ok(Form::new()
        .text("name", name)
        .text("description", description)
        .text("size", size.to_string())
        .part("file", file_part))
}
