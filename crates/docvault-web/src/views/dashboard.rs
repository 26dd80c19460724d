//! Dashboard page: upload totals by file type and by user.

use dioxus::prelude::*;

use docvault_core::models::DashboardSummary;
use docvault_core::screens::dashboard::load_dashboard;
use docvault_core::Section;

use crate::components::NavBar;
use crate::state::AppState;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let mut summary = use_signal(Section::<DashboardSummary>::default);

    use_hook(move || {
        let Some(api) = state.client() else {
            return;
        };
        let session = state.session();
        spawn(async move {
            summary.set(load_dashboard(&*api, session.as_ref()).await);
        });
    });

    let content = match &*summary.read() {
        Section::Loading => rsx! { p { class: "muted", "Loading dashboard..." } },
        Section::Failed(message) => rsx! { p { class: "error", "{message}" } },
        Section::Ready(summary) => rsx! {
            section {
                class: "card",
                h2 { "Total Files Uploaded: {summary.total_files}" }
            }

            section {
                class: "card",
                h2 { "Files by Type" }
                table {
                    thead {
                        tr {
                            th { "File Type" }
                            th { "Count" }
                        }
                    }
                    tbody {
                        for file_type in summary.file_types.iter() {
                            tr {
                                td { "{file_type.file_extension}" }
                                td { "{file_type.count}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h2 { "Files by User" }
                table {
                    thead {
                        tr {
                            th { "Username" }
                            th { "File Count" }
                            th { "Files" }
                        }
                    }
                    tbody {
                        for entry in summary.user_file_counts.iter() {
                            tr {
                                td { "{entry.username}" }
                                td { "{entry.file_count}" }
                                td {
                                    ul {
                                        class: "file-list",
                                        for file in entry.files.iter() {
                                            li {
                                                key: "{file.id}",
                                                strong { "{file.name}" }
                                                span { " ({file.file_extension}) Size: {file.size} KB" }
                                                if let Some(description) = file.description.as_deref() {
                                                    p { class: "muted", "{description}" }
                                                }
                                                if let Some(url) = state.media_url(&file.file) {
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
                        }
                    }
                }
            }
        },
    };

    rsx! {
        NavBar {}

        main {
            class: "dashboard",
            h1 { "Dashboard" }
            {content}
        }
    }
}
