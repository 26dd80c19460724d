use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav {
            class: "nav-bar",

            Link { to: Route::Profile {}, "Profile" }
            Link { to: Route::Dashboard {}, "Dashboard" }
        }
    }
}
