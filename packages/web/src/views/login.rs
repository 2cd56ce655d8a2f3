//! Login page view with the email/password form.

use dioxus::prelude::*;

use ui::{use_auth, use_portal_client, AuthState, ErrorBanner, FieldInput};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_portal_client();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match client.sign_in(&e, &p).await {
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

            h1 { class: "auth-title", "Document Portal" }
            p { class: "auth-subtitle", "Sign in to browse theses and syllabi" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

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

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            div {
                class: "auth-links",
                Link { to: Route::Register {}, "Create an account" }
                Link { to: Route::PasswordReset {}, "Forgot password?" }
            }
        }
    }
}
