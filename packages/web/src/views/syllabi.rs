//! Syllabus list view.

use dioxus::prelude::*;

use store::SyllabiStore;
use ui::{use_auth, use_portal_client, DocumentList, DocumentRow};

use crate::views::PortalNav;
use crate::Route;

#[component]
pub fn Syllabi() -> Element {
    let client = use_portal_client();
    let auth = use_auth();
    let nav = use_navigator();
    let mut store = use_signal(|| SyllabiStore::new(client.clone()));

    // Fresh snapshot on mount
    let _loader = use_resource(move || async move {
        let mut s = store.peek().clone();
        s.fetch_all().await;
        store.set(s);
    });

    // Drop the cached list once the session ends
    use_effect(move || {
        if !auth().loading && auth().user.is_none() {
            store.write().reset();
        }
    });

    let rows: Vec<DocumentRow> = store()
        .records()
        .iter()
        .map(|s| DocumentRow {
            title: s.title.clone(),
            subtitle: s.course_code.clone(),
            file_url: s.file_url.clone(),
            uploaded: s.created_at.format("%b %e, %Y").to_string(),
        })
        .collect();
    let error = store()
        .last_error()
        .map(|err| format!("Couldn't load syllabi: {err}"));

    rsx! {
        PortalNav {}

        div {
            class: "page",

            div {
                class: "page-header",
                h1 { "Syllabi" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::UploadSyllabus {});
                    },
                    "Upload syllabus"
                }
            }

            if store().is_loading() {
                p { class: "page-subtitle", "Loading..." }
            } else {
                DocumentList {
                    rows: rows,
                    empty_message: "No syllabi have been uploaded yet.",
                    error: error,
                }
            }
        }
    }
}
