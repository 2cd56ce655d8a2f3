//! Password recovery request page.

use dioxus::prelude::*;

use ui::{use_portal_client, ErrorBanner, FieldInput};

use crate::Route;

#[component]
pub fn PasswordReset() -> Element {
    let client = use_portal_client();

    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }

            loading.set(true);
            match client.request_password_reset(&e).await {
                Ok(()) => {
                    sent.set(true);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { class: "auth-title", "Reset Password" }

            if sent() {
                p {
                    class: "auth-subtitle",
                    "If an account exists for that address, a recovery email is on its way."
                }
            } else {
                p {
                    class: "auth-subtitle",
                    "Enter your email and we'll send you a recovery link"
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    ErrorBanner { message: error() }

                    FieldInput {
                        label: "Email",
                        r#type: "email",
                        placeholder: "you@x.edu",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Sending..." } else { "Send recovery email" }
                    }
                }
            }

            div {
                class: "auth-links",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
