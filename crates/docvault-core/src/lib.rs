//! docvault-core - Core library for DocVault
//!
//! This crate contains the shared models, session store, HTTP API client and
//! screen workflows used by the DocVault browser client. Nothing here touches
//! the DOM, so every rule can be exercised by plain unit tests.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod screens;
pub mod session;
pub mod util;
pub mod validation;

pub use api::{ApiClient, ApiError, ApiResult, DocVaultApi};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use screens::{Screen, Section};
pub use session::{Session, SessionStore, TokenKind, TokenStorage};
