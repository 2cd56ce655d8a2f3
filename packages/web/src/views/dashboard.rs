//! Dashboard: the signed-in landing page.

use dioxus::prelude::*;

use store::{SyllabiStore, ThesesStore};
use ui::{use_auth, use_portal_client};

use crate::views::PortalNav;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_portal_client();
    let auth = use_auth();
    let mut theses = use_signal(|| ThesesStore::new(client.clone()));
    let mut syllabi = use_signal(|| SyllabiStore::new(client.clone()));

    // Load fresh counts on mount
    let _loader = use_resource(move || async move {
        let mut t = theses.peek().clone();
        t.fetch_all().await;
        theses.set(t);

        let mut s = syllabi.peek().clone();
        s.fetch_all().await;
        syllabi.set(s);
    });

    let greeting = auth()
        .user
        .map(|u| format!("Signed in as {}", u.email))
        .unwrap_or_default();
    let thesis_count = theses().records().len();
    let syllabus_count = syllabi().records().len();

    rsx! {
        PortalNav {}

        div {
            class: "page",

            h1 { "Dashboard" }
            p { class: "page-subtitle", "{greeting}" }

            div {
                class: "dashboard-cards",

                div {
                    class: "dashboard-card",
                    h2 { "Theses" }
                    p { class: "dashboard-count", "{thesis_count}" }
                    div {
                        class: "dashboard-card-actions",
                        Link { to: Route::Theses {}, "Browse" }
                        Link { to: Route::UploadThesis {}, "Upload" }
                    }
                }

                div {
                    class: "dashboard-card",
                    h2 { "Syllabi" }
                    p { class: "dashboard-count", "{syllabus_count}" }
                    div {
                        class: "dashboard-card-actions",
                        Link { to: Route::Syllabi {}, "Browse" }
                        Link { to: Route::UploadSyllabus {}, "Upload" }
                    }
                }
            }
        }
    }
}
