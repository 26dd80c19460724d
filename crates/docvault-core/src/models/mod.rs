//! Data models for DocVault
//!
//! Transient copies of server-owned entities. The client never derives or
//! mutates these locally beyond holding edit buffers.

mod address;
mod auth;
mod dashboard;
mod document;
mod user;

pub use address::{Address, AddressId, NewAddress};
pub use auth::{LoginRequest, RegistrationRequest, TokenPair};
pub use dashboard::{DashboardFile, DashboardSummary, FileTypeCount, UserFileCount};
pub use document::{Document, DocumentId, NewDocument, UploadFile};
pub use user::{User, UserUpdate};
