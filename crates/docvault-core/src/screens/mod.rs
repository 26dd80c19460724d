//! Screen workflows.
//!
//! Each submodule holds the form state, edit buffers and async operations of
//! one screen. The UI owns the reactive state and applies the results; nothing
//! here keeps a borrow across an await.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;

#[cfg(test)]
pub(crate) mod fake;

use crate::api::ApiResult;

/// The four routable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Profile,
    Dashboard,
}

impl Screen {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Profile => "/profile",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Loading state of one independently fetched section of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Section<T> {
    /// Maps a fetch result, logging the failure detail and keeping only
    /// `message` for display.
    pub fn from_result(result: ApiResult<T>, message: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => {
                tracing::error!("{}: {}", message, error);
                Self::Failed(message.to_string())
            }
        }
    }

    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
