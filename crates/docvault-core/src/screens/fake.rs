//! Scripted in-memory API used by the workflow tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::api::{ApiError, ApiResult, DocVaultApi};
use crate::models::{
    Address, DashboardSummary, Document, LoginRequest, NewAddress, NewDocument,
    RegistrationRequest, TokenPair, User, UserUpdate,
};
use crate::session::Session;

#[derive(Debug, Clone)]
pub enum Failure {
    Rejected(u16, String),
    Transport,
}

impl Failure {
    fn into_error(self) -> ApiError {
        match self {
            Self::Rejected(status, body) => ApiError::Rejected { status, body },
            Self::Transport => ApiError::Transport("connection refused".to_string()),
        }
    }
}

/// Server stand-in. Records every call by operation name and keeps the
/// authoritative copies of the collections.
pub struct FakeApi {
    calls: RefCell<Vec<&'static str>>,
    failures: RefCell<HashMap<&'static str, Failure>>,
    next_id: Cell<i64>,
    pub user: RefCell<User>,
    pub addresses: RefCell<Vec<Address>>,
    pub documents: RefCell<Vec<Document>>,
    pub summary: RefCell<DashboardSummary>,
    pub last_update: RefCell<Option<UserUpdate>>,
    /// Username the server stores in place of the submitted one, when set.
    pub server_username: RefCell<Option<String>>,
    pub last_session: RefCell<Option<Session>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::default(),
            failures: RefCell::default(),
            next_id: Cell::new(100),
            user: RefCell::new(User {
                pk: 1,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                phone_number: Some("5550001111".to_string()),
                first_name: None,
                last_name: None,
            }),
            addresses: RefCell::default(),
            documents: RefCell::default(),
            summary: RefCell::new(DashboardSummary {
                total_files: 0,
                file_types: Vec::new(),
                user_file_counts: Vec::new(),
            }),
            last_update: RefCell::default(),
            server_username: RefCell::default(),
            last_session: RefCell::default(),
        }
    }
}

impl FakeApi {
    pub fn fail(&self, operation: &'static str, failure: Failure) {
        self.failures.borrow_mut().insert(operation, failure);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &'static str, session: Option<&Session>) -> ApiResult<()> {
        self.calls.borrow_mut().push(operation);
        *self.last_session.borrow_mut() = session.cloned();
        match self.failures.borrow().get(operation) {
            Some(failure) => Err(failure.clone().into_error()),
            None => Ok(()),
        }
    }

    fn allocate_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl DocVaultApi for FakeApi {
    async fn obtain_token(&self, _credentials: &LoginRequest) -> ApiResult<TokenPair> {
        self.record("obtain_token", None)?;
        Ok(TokenPair {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
        })
    }

    async fn register(&self, _request: &RegistrationRequest) -> ApiResult<()> {
        self.record("register", None)
    }

    async fn fetch_user(&self, session: Option<&Session>) -> ApiResult<User> {
        self.record("fetch_user", session)?;
        Ok(self.user.borrow().clone())
    }

    async fn update_user(
        &self,
        session: Option<&Session>,
        update: &UserUpdate,
    ) -> ApiResult<User> {
        self.record("update_user", session)?;
        *self.last_update.borrow_mut() = Some(update.clone());
        let mut user = self.user.borrow_mut();
        user.username = self
            .server_username
            .borrow()
            .clone()
            .unwrap_or_else(|| update.username.clone());
        user.phone_number = Some(update.phone_number.clone());
        Ok(user.clone())
    }

    async fn list_addresses(&self, session: Option<&Session>) -> ApiResult<Vec<Address>> {
        self.record("list_addresses", session)?;
        Ok(self.addresses.borrow().clone())
    }

    async fn create_address(
        &self,
        session: Option<&Session>,
        address: &NewAddress,
    ) -> ApiResult<Address> {
        self.record("create_address", session)?;
        let created = Address {
            id: self.allocate_id(),
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            country: address.country.clone(),
            zip_code: address.zip_code.clone(),
            is_default: address.is_default,
        };
        self.addresses.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn replace_address(
        &self,
        session: Option<&Session>,
        address: &Address,
    ) -> ApiResult<Address> {
        self.record("replace_address", session)?;
        let mut addresses = self.addresses.borrow_mut();
        let slot = addresses
            .iter_mut()
            .find(|existing| existing.id == address.id)
            .ok_or_else(|| ApiError::Rejected {
                status: 404,
                body: r#"{"detail":"Not found."}"#.to_string(),
            })?;
        *slot = address.clone();
        Ok(address.clone())
    }

    async fn upload_document(
        &self,
        session: Option<&Session>,
        document: NewDocument,
    ) -> ApiResult<Document> {
        self.record("upload_document", session)?;
        let extension = document
            .file
            .file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_string();
        let created = Document {
            id: self.allocate_id(),
            name: document.name,
            description: Some(document.description),
            size: document.size,
            file: Some(format!("documents/{}", document.file.file_name)),
            file_url: None,
            created_by_id: Some(self.user.borrow().pk),
            username: self.user.borrow().username.clone(),
            file_type: extension,
        };
        self.documents.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn list_documents(&self, session: Option<&Session>) -> ApiResult<Vec<Document>> {
        self.record("list_documents", session)?;
        Ok(self.documents.borrow().clone())
    }

    async fn dashboard_summary(&self, session: Option<&Session>) -> ApiResult<DashboardSummary> {
        self.record("dashboard_summary", session)?;
        Ok(self.summary.borrow().clone())
    }
}
