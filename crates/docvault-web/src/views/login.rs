//! Login page view with email/password form.

use dioxus::prelude::*;

use docvault_core::screens::login::{submit_login, LoginForm, LoginPhase};

use crate::components::FormField;
use crate::route::Route;
use crate::state::AppState;

#[component]
pub fn Login() -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phase = use_signal(LoginPhase::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if phase.read().is_submitting() {
            return;
        }
        let Some(api) = state.client() else {
            return;
        };
        let store = state.store();
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        phase.set(LoginPhase::Submitting);

        spawn(async move {
            let outcome = submit_login(&*api, &store, &form).await;
            let redirect = outcome.redirect();
            phase.set(outcome);
            if let Some(screen) = redirect {
                navigator.push(Route::from(screen));
            }
        });
    };

    let submitting = phase.read().is_submitting();

    rsx! {
        div {
            class: "auth-page",

            h1 { "Login" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                FormField {
                    label: "Email",
                    name: "email",
                    input_type: "email",
                    value: email(),
                    oninput: move |value| email.set(value),
                }
                FormField {
                    label: "Password",
                    name: "password",
                    input_type: "password",
                    value: password(),
                    oninput: move |value| password.set(value),
                }

                if let Some(message) = phase.read().error() {
                    div { class: "form-error", "{message}" }
                }

                button {
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Logging in..." } else { "Login" }
                }
            }

            p {
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
