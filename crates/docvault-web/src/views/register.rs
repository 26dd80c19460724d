//! Registration page view.

use dioxus::prelude::*;

use docvault_core::screens::register::{submit_registration, RegisterForm, RegisterOutcome};
use docvault_core::validation::RegisterFieldErrors;

use crate::components::FormField;
use crate::route::Route;
use crate::state::AppState;

#[component]
pub fn Register() -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut field_errors = use_signal(RegisterFieldErrors::default);
    let mut server_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let Some(api) = state.client() else {
            return;
        };
        let current = form();
        server_error.set(None);
        submitting.set(true);

        spawn(async move {
            let outcome = submit_registration(&*api, &current).await;
            let redirect = outcome.redirect();
            submitting.set(false);
            match outcome {
                RegisterOutcome::Invalid(errors) => field_errors.set(errors),
                RegisterOutcome::Failed(message) => {
                    field_errors.set(RegisterFieldErrors::default());
                    server_error.set(Some(message));
                }
                RegisterOutcome::Registered => field_errors.set(RegisterFieldErrors::default()),
            }
            if let Some(screen) = redirect {
                navigator.push(Route::from(screen));
            }
        });
    };

    let errors = field_errors();
    let values = form();

    rsx! {
        div {
            class: "auth-page",

            h1 { "Register" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                FormField {
                    label: "Username",
                    name: "username",
                    value: values.username,
                    error: errors.username.map(str::to_string),
                    oninput: move |value| form.write().username = value,
                }
                FormField {
                    label: "Email",
                    name: "email",
                    input_type: "email",
                    value: values.email,
                    error: errors.email.map(str::to_string),
                    oninput: move |value| form.write().email = value,
                }
                FormField {
                    label: "Password",
                    name: "password1",
                    input_type: "password",
                    value: values.password1,
                    error: errors.password1.map(str::to_string),
                    oninput: move |value| form.write().password1 = value,
                }
                FormField {
                    label: "Confirm Password",
                    name: "password2",
                    input_type: "password",
                    value: values.password2,
                    error: errors.password2.map(str::to_string),
                    oninput: move |value| form.write().password2 = value,
                }
                FormField {
                    label: "Phone Number",
                    name: "phone_number",
                    input_type: "tel",
                    value: values.phone_number,
                    error: errors.phone_number.map(str::to_string),
                    oninput: move |value| form.write().phone_number = value,
                }

                if let Some(message) = server_error() {
                    div { class: "form-error", "{message}" }
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Registering..." } else { "Register" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
