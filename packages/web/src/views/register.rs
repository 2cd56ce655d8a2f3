//! Registration page view with the email/password form.

use dioxus::prelude::*;

use ui::{use_auth, use_portal_client, AuthState, ErrorBanner, FieldInput};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let client = use_portal_client();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match client.sign_up(&e, &p).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.push(Route::Dashboard {});
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

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Register with your institutional email" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                ErrorBanner { message: error() }

                FieldInput {
                    label: "Email",
                    r#type: "email",
                    placeholder: "you@x.edu",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                FieldInput {
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                FieldInput {
                    label: "Confirm password",
                    r#type: "password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            div {
                class: "auth-links",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
