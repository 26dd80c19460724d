//! URL routes.

use dioxus::prelude::*;
use docvault_core::Screen;

use crate::views::{Dashboard, Login, Profile, Register};

/// No route is guarded; screens without a session show their fetch errors.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/dashboard")]
    Dashboard {},
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Login => Self::Login {},
            Screen::Register => Self::Register {},
            Screen::Profile => Self::Profile {},
            Screen::Dashboard => Self::Dashboard {},
        }
    }
}
