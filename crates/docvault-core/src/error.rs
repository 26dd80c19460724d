//! Error types for docvault-core

use thiserror::Error;

use crate::api::ApiError;
use crate::session::SessionError;

/// Result type alias using docvault-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in docvault-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Remote API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session storage error
    #[error(transparent)]
    Session(#[from] SessionError),
}
