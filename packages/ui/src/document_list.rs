//! List rendering for fetched document records.

use dioxus::prelude::*;

/// One row of a document list, already formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentRow {
    pub title: String,
    pub subtitle: String,
    pub file_url: String,
    pub uploaded: String,
}

/// Table of document records, newest first as delivered by the store.
///
/// `error` carries the store's degraded state: when a fetch failed the list
/// is empty and the banner explains why instead of claiming "no records".
#[component]
pub fn DocumentList(
    rows: Vec<DocumentRow>,
    empty_message: String,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "document-list",

            if let Some(err) = error {
                div {
                    class: "error-banner",
                    "{err}"
                }
            } else if rows.is_empty() {
                p {
                    class: "document-list-empty",
                    "{empty_message}"
                }
            } else {
                table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Details" }
                            th { "Uploaded" }
                            th { "" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                td { "{row.title}" }
                                td { "{row.subtitle}" }
                                td { "{row.uploaded}" }
                                td {
                                    a {
                                        href: "{row.file_url}",
                                        target: "_blank",
                                        "Open"
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
