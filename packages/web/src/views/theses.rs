//! Thesis list view.

use dioxus::prelude::*;

use store::ThesesStore;
use ui::{use_auth, use_portal_client, DocumentList, DocumentRow};

use crate::views::PortalNav;
use crate::Route;

#[component]
pub fn Theses() -> Element {
    let client = use_portal_client();
    let auth = use_auth();
    let nav = use_navigator();
    let mut store = use_signal(|| ThesesStore::new(client.clone()));

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
        .map(|t| DocumentRow {
            title: t.title.clone(),
            subtitle: t.author.clone(),
            file_url: t.file_url.clone(),
            uploaded: t.created_at.format("%b %e, %Y").to_string(),
        })
        .collect();
    let error = store()
        .last_error()
        .map(|err| format!("Couldn't load theses: {err}"));

    rsx! {
        PortalNav {}

        div {
            class: "page",

            div {
                class: "page-header",
                h1 { "Theses" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::UploadThesis {});
                    },
                    "Upload thesis"
                }
            }

            if store().is_loading() {
                p { class: "page-subtitle", "Loading..." }
            } else {
                DocumentList {
                    rows: rows,
                    empty_message: "No theses have been uploaded yet.",
                    error: error,
                }
            }
        }
    }
}
