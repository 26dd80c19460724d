//! Address list with an add form and single-row inline editing.

use dioxus::prelude::*;

use docvault_core::models::Address;
use docvault_core::screens::profile::{
    add_address, save_address, AddressDraft, AddressField, EditTarget,
};
use docvault_core::Section;

use crate::state::AppState;

#[component]
pub fn AddressBook(addresses: Signal<Section<Vec<Address>>>) -> Element {
    let state = use_context::<AppState>();
    let mut addresses = addresses;
    let mut new_address = use_signal(AddressDraft::default);
    let mut target = use_signal(EditTarget::default);
    let mut error = use_signal(|| None::<String>);

    let submit_new = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(api) = state.client() else {
            return;
        };
        let session = state.session();
        let draft = new_address();
        error.set(None);

        spawn(async move {
            match add_address(&*api, session.as_ref(), &draft).await {
                Ok(section) => {
                    addresses.set(section);
                    new_address.set(AddressDraft::default());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let save_edit = move |()| {
        let EditTarget::Editing { id, draft } = target() else {
            return;
        };
        let Some(api) = state.client() else {
            return;
        };
        let session = state.session();
        error.set(None);

        spawn(async move {
            match save_address(&*api, session.as_ref(), id, &draft).await {
                Ok(section) => {
                    target.write().cancel();
                    addresses.set(section);
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let list = match &*addresses.read() {
        Section::Loading => rsx! { p { class: "muted", "Loading addresses..." } },
        Section::Failed(message) => rsx! { p { class: "error", "{message}" } },
        Section::Ready(rows) if rows.is_empty() => rsx! { p { class: "muted", "No addresses saved." } },
        Section::Ready(rows) => rsx! {
            table {
                thead {
                    tr {
                        for field in AddressField::ALL {
                            th { {field.label()} }
                        }
                        th { "Default" }
                        th {}
                    }
                }
                tbody {
                    for address in rows.iter() {
                        AddressRow {
                            key: "{address.id}",
                            address: address.clone(),
                            target,
                            on_save: save_edit,
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "card",

            h2 { "Addresses" }
            {list}
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }

            h3 { "Add Address" }
            form {
                class: "address-form",
                onsubmit: submit_new,

                for field in AddressField::ALL {
                    input {
                        placeholder: field.label(),
                        value: new_address.read().get(field).to_string(),
                        oninput: move |evt: FormEvent| new_address.write().set(field, evt.value()),
                    }
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: new_address.read().is_default,
                        onchange: move |evt: FormEvent| new_address.write().is_default = evt.checked(),
                    }
                    "Default"
                }
                button { r#type: "submit", "Add Address" }
            }
        }
    }
}

#[component]
fn AddressRow(address: Address, target: Signal<EditTarget>, on_save: EventHandler<()>) -> Element {
    let mut target = target;
    let id = address.id;

    if !target.read().is_editing(id) {
        let row = address.clone();
        return rsx! {
            tr {
                for field in AddressField::ALL {
                    td { {field.value(&address).to_string()} }
                }
                td { if address.is_default { "Yes" } else { "No" } }
                td {
                    button {
                        onclick: move |_| target.write().begin(&row),
                        "Edit"
                    }
                }
            }
        };
    }

    let draft = match &*target.read() {
        EditTarget::Editing { draft, .. } => draft.clone(),
        EditTarget::None => AddressDraft::default(),
    };

    rsx! {
        tr {
            class: "editing",

            for field in AddressField::ALL {
                td {
                    input {
                        value: draft.get(field).to_string(),
                        oninput: move |evt: FormEvent| {
                            if let Some(draft) = target.write().draft_mut() {
                                draft.set(field, evt.value());
                            }
                        },
                    }
                }
            }
            td {
                input {
                    r#type: "checkbox",
                    checked: draft.is_default,
                    onchange: move |evt: FormEvent| {
                        if let Some(draft) = target.write().draft_mut() {
                            draft.is_default = evt.checked();
                        }
                    },
                }
            }
            td {
                button { onclick: move |_| on_save.call(()), "Save" }
                button { onclick: move |_| target.write().cancel(), "Cancel" }
            }
        }
    }
}
