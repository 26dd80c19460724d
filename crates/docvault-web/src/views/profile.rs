//! Profile page: account card, address book and documents.

use dioxus::prelude::*;

use docvault_core::models::{Address, Document, User};
use docvault_core::screens::profile::{load_addresses, load_documents, load_user, logout};
use docvault_core::Section;

use crate::components::{AddressBook, DocumentPanel, NavBar, UserCard};
use crate::route::Route;
use crate::state::AppState;

#[component]
pub fn Profile() -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();
    let mut user = use_signal(Section::<User>::default);
    let mut addresses = use_signal(Section::<Vec<Address>>::default);
    let mut documents = use_signal(Section::<Vec<Document>>::default);

    // Each section loads in its own task so one failure leaves the others intact.
    let reload_all = move || {
        let Some(api) = state.client() else {
            return;
        };
        let session = state.session();

        let (user_api, user_session) = (api.clone(), session.clone());
        spawn(async move {
            user.set(load_user(&*user_api, user_session.as_ref()).await);
        });
        let (address_api, address_session) = (api.clone(), session.clone());
        spawn(async move {
            addresses.set(load_addresses(&*address_api, address_session.as_ref()).await);
        });
        spawn(async move {
            documents.set(load_documents(&*api, session.as_ref()).await);
        });
    };

    use_hook(reload_all);

    let handle_logout = move |_: MouseEvent| {
        let screen = logout(&state.store());
        navigator.push(Route::from(screen));
    };

    rsx! {
        NavBar {}

        main {
            class: "profile",

            header {
                class: "page-header",
                h1 { "Profile" }
                button { class: "logout", onclick: handle_logout, "Logout" }
            }

            UserCard { user, on_saved: move |()| reload_all() }
            AddressBook { addresses }
            DocumentPanel { documents }
        }
    }
}
