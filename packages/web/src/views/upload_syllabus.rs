//! Syllabus upload form.

use dioxus::prelude::*;

use store::{NewSyllabus, SyllabiStore};
use ui::{use_auth, use_portal_client, ErrorBanner, FieldInput};

use crate::views::PortalNav;
use crate::Route;

#[component]
pub fn UploadSyllabus() -> Element {
    let client = use_portal_client();
    let auth = use_auth();
    let nav = use_navigator();
    let mut store = use_signal(|| SyllabiStore::new(client.clone()));

    let mut course_code = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut file_url = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let c = course_code().trim().to_uppercase();
            let t = title().trim().to_string();
            let f = file_url().trim().to_string();

            if c.is_empty() {
                error.set(Some("Course code is required".to_string()));
                return;
            }
            if t.is_empty() {
                error.set(Some("Title is required".to_string()));
                return;
            }
            if f.is_empty() {
                error.set(Some("File link is required".to_string()));
                return;
            }

            saving.set(true);
            let payload = NewSyllabus {
                course_code: c,
                title: t,
                file_url: f,
            };
            let user = auth.peek().user.clone();
            let mut s = store.peek().clone();
            match s.insert(user.as_ref(), &payload).await {
                Ok(()) => {
                    store.set(s);
                    nav.push(Route::Syllabi {});
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        PortalNav {}

        div {
            class: "page",

            h1 { "Upload Syllabus" }

            form {
                class: "upload-form",
                onsubmit: handle_submit,

                ErrorBanner { message: error() }

                FieldInput {
                    label: "Course code",
                    placeholder: "CS101",
                    value: course_code(),
                    oninput: move |evt: FormEvent| course_code.set(evt.value()),
                }

                FieldInput {
                    label: "Title",
                    placeholder: "Course title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }

                FieldInput {
                    label: "File link",
                    placeholder: "https://...",
                    value: file_url(),
                    oninput: move |evt: FormEvent| file_url.set(evt.value()),
                }

                div {
                    class: "form-actions",
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Uploading..." } else { "Upload" }
                    }
                    Link { class: "secondary", to: Route::Syllabi {}, "Cancel" }
                }
            }
        }
    }
}
