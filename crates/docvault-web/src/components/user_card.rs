//! Account details with inline editing.

use dioxus::prelude::*;

use docvault_core::models::User;
use docvault_core::screens::profile::{save_user, UserEditor};
use docvault_core::Section;

use crate::state::AppState;

#[component]
pub fn UserCard(user: Signal<Section<User>>, on_saved: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut user = user;
    let mut editor = use_signal(UserEditor::default);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let begin_edit = move |_: MouseEvent| {
        if let Some(current) = user.read().ready() {
            editor.write().begin(current);
        }
        error.set(None);
    };

    let cancel_edit = move |_: MouseEvent| {
        editor.write().cancel();
        error.set(None);
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(draft) = editor.read().draft().cloned() else {
            return;
        };
        let Some(api) = state.client() else {
            return;
        };
        let session = state.session();
        error.set(None);
        saving.set(true);

        spawn(async move {
            match save_user(&*api, session.as_ref(), &draft).await {
                Ok(updated) => {
                    editor.write().commit(&mut user.write(), updated);
                    on_saved.call(());
                }
                Err(message) => error.set(Some(message)),
            }
            saving.set(false);
        });
    };

    let body = match &*user.read() {
        Section::Loading => rsx! { p { class: "muted", "Loading profile..." } },
        Section::Failed(message) => rsx! { p { class: "error", "{message}" } },
        Section::Ready(current) => match editor.read().draft().cloned() {
            Some(draft) => rsx! {
                form {
                    class: "user-form",
                    onsubmit: save,

                    label {
                        "Username"
                        input {
                            value: "{draft.username}",
                            oninput: move |evt: FormEvent| {
                                if let Some(draft) = editor.write().draft_mut() {
                                    draft.username = evt.value();
                                }
                            },
                        }
                    }
                    p { "Email: {current.email}" }
                    label {
                        "Phone Number"
                        input {
                            value: "{draft.phone_number}",
                            oninput: move |evt: FormEvent| {
                                if let Some(draft) = editor.write().draft_mut() {
                                    draft.phone_number = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "row-actions",
                        button { r#type: "submit", disabled: saving(), "Save" }
                        button { r#type: "button", onclick: cancel_edit, "Cancel" }
                    }
                }
            },
            None => rsx! {
                p { "Username: {current.username}" }
                p { "Email: {current.email}" }
                p { "Phone Number: " {current.phone_display().to_string()} }
                button { onclick: begin_edit, "Edit Profile" }
            },
        },
    };

    rsx! {
        section {
            class: "card",

            h2 { "User Profile" }
            {body}
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
        }
    }
}
