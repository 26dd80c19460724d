//! Document upload form and the list of uploaded documents.

use dioxus::prelude::*;

use docvault_core::models::{Document, UploadFile};
use docvault_core::screens::profile::{upload_document, DocumentDraft};
use docvault_core::Section;

use crate::state::AppState;

#[component]
pub fn DocumentPanel(documents: Signal<Section<Vec<Document>>>) -> Element {
    let state = use_context::<AppState>();
    let mut documents = documents;
    let mut draft = use_signal(DocumentDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut uploading = use_signal(|| false);

    let on_pick_file = move |evt: FormEvent| {
        let mut files = evt.files();
        let Some(file) = files.pop() else {
            draft.write().file = None;
            return;
        };

        let file_name = file.name();
        let content_type = file.content_type();

        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    draft.write().file = Some(UploadFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
                Err(read_error) => {
                    tracing::error!("Failed to read selected file: {}", read_error);
                    draft.write().file = None;
                    error.set(Some(format!("Failed to read selected file: {read_error}")));
                }
            }
        });
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(api) = state.client() else {
            return;
        };
        let session = state.session();
        let current = draft();
        error.set(None);
        uploading.set(true);

        spawn(async move {
            match upload_document(&*api, session.as_ref(), &current).await {
                Ok(section) => {
                    documents.set(section);
                    draft.set(DocumentDraft::default());
                }
                Err(message) => error.set(Some(message)),
            }
            uploading.set(false);
        });
    };

    let list = match &*documents.read() {
        Section::Loading => rsx! { p { class: "muted", "Loading documents..." } },
        Section::Failed(message) => rsx! { p { class: "error", "{message}" } },
        Section::Ready(rows) if rows.is_empty() => rsx! { p { class: "muted", "No documents uploaded." } },
        Section::Ready(rows) => rsx! {
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Description" }
                        th { "Size (MB)" }
                        th { "Type" }
                        th { "Uploaded By" }
                        th {}
                    }
                }
                tbody {
                    for document in rows.iter() {
                        tr {
                            key: "{document.id}",
                            td { "{document.name}" }
                            td { {document.description.clone().unwrap_or_default()} }
                            td { "{document.size}" }
                            td { "{document.file_type}" }
                            td { "{document.username}" }
                            td {
                                if let Some(url) = document.download_target().and_then(|file| state.media_url(file)) {
                                    a {
                                        href: "{url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Download"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    let selected_file = draft
        .read()
        .file
        .as_ref()
        .map(|file| file.file_name.clone());

    rsx! {
        section {
            class: "card",

            h2 { "Documents" }
            form {
                class: "upload-form",
                onsubmit: submit,

                input {
                    placeholder: "Name",
                    value: draft.read().name.clone(),
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
                input {
                    placeholder: "Description",
                    value: draft.read().description.clone(),
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }
                input {
                    placeholder: "Size (MB)",
                    inputmode: "numeric",
                    value: draft.read().size.clone(),
                    oninput: move |evt: FormEvent| draft.write().size = evt.value(),
                }
                input {
                    r#type: "file",
                    onchange: on_pick_file,
                }
                if let Some(name) = selected_file {
                    span { class: "muted", "{name}" }
                }
                button {
                    r#type: "submit",
                    disabled: uploading(),
                    if uploading() { "Uploading..." } else { "Upload Document" }
                }
            }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }

            {list}
        }
    }
}
