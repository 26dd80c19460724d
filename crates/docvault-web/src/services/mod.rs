//! Application services
//!
//! Browser-side backends for core traits.

mod session_store;

pub use session_store::BrowserTokenStorage;
