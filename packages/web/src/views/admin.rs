//! Admin panel, reachable only through the allow-list gate.

use dioxus::prelude::*;

use store::{SyllabiStore, ThesesStore};
use ui::{use_portal_client, DocumentList, DocumentRow};

use crate::views::PortalNav;

#[component]
pub fn Admin() -> Element {
    let client = use_portal_client();
    let mut theses = use_signal(|| ThesesStore::new(client.clone()));
    let mut syllabi = use_signal(|| SyllabiStore::new(client.clone()));

    let _loader = use_resource(move || async move {
        let mut t = theses.peek().clone();
        t.fetch_all().await;
        theses.set(t);

        let mut s = syllabi.peek().clone();
        s.fetch_all().await;
        syllabi.set(s);
    });

    let thesis_rows: Vec<DocumentRow> = theses()
        .records()
        .iter()
        .map(|t| DocumentRow {
            title: t.title.clone(),
            subtitle: format!("{}, uploaded by {}", t.author, t.user_id),
            file_url: t.file_url.clone(),
            uploaded: t.created_at.format("%b %e, %Y").to_string(),
        })
        .collect();
    let syllabus_rows: Vec<DocumentRow> = syllabi()
        .records()
        .iter()
        .map(|s| DocumentRow {
            title: format!("{} {}", s.course_code, s.title),
            subtitle: format!("uploaded by {}", s.user_id),
            file_url: s.file_url.clone(),
            uploaded: s.created_at.format("%b %e, %Y").to_string(),
        })
        .collect();
    let thesis_error = theses()
        .last_error()
        .map(|err| format!("Couldn't load theses: {err}"));
    let syllabus_error = syllabi()
        .last_error()
        .map(|err| format!("Couldn't load syllabi: {err}"));

    rsx! {
        PortalNav {}

        div {
            class: "page",

            h1 { "Administration" }
            p {
                class: "page-subtitle",
                "Every upload across the portal, newest first."
            }

            h2 { "Theses" }
            DocumentList {
                rows: thesis_rows,
                empty_message: "No theses on record.",
                error: thesis_error,
            }

            h2 { "Syllabi" }
            DocumentList {
                rows: syllabus_rows,
                empty_message: "No syllabi on record.",
                error: syllabus_error,
            }
        }
    }
}
