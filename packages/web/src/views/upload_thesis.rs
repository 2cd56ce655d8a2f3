//! Thesis upload form.

use dioxus::prelude::*;

use store::{NewThesis, ThesesStore};
use ui::{use_auth, use_portal_client, ErrorBanner, FieldInput};

use crate::views::PortalNav;
use crate::Route;

#[component]
pub fn UploadThesis() -> Element {
    let client = use_portal_client();
    let auth = use_auth();
    let nav = use_navigator();
    let mut store = use_signal(|| ThesesStore::new(client.clone()));

    let mut title = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut file_url = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let t = title().trim().to_string();
            let a = author().trim().to_string();
            let f = file_url().trim().to_string();

            if t.is_empty() {
                error.set(Some("Title is required".to_string()));
                return;
            }
            if a.is_empty() {
                error.set(Some("Author is required".to_string()));
                return;
            }
            if f.is_empty() {
                error.set(Some("File link is required".to_string()));
                return;
            }

            saving.set(true);
            let payload = NewThesis {
                title: t,
                author: a,
                file_url: f,
            };
            let user = auth.peek().user.clone();
            let mut s = store.peek().clone();
            match s.insert(user.as_ref(), &payload).await {
                Ok(()) => {
                    store.set(s);
                    nav.push(Route::Theses {});
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

            h1 { "Upload Thesis" }

            form {
                class: "upload-form",
                onsubmit: handle_submit,

                ErrorBanner { message: error() }

                FieldInput {
                    label: "Title",
                    placeholder: "Thesis title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }

                FieldInput {
                    label: "Author",
                    placeholder: "Full name",
                    value: author(),
                    oninput: move |evt: FormEvent| author.set(evt.value()),
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
                    Link { class: "secondary", to: Route::Theses {}, "Cancel" }
                }
            }
        }
    }
}
