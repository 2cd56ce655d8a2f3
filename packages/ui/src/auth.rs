//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::UserInfo;

use crate::use_portal_client;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_portal_client();
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            match client.current_user().await {
                Ok(user) => {
                    auth_state.set(AuthState {
                        user,
                        loading: false,
                    });
                }
                Err(err) => {
                    tracing::warn!("session query failed on load: {err}");
                    auth_state.set(AuthState {
                        user: None,
                        loading: false,
                    });
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_portal_client();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            client.sign_out().await;
            auth_state.set(AuthState {
                user: None,
                loading: false,
            });
            // Back to the login page
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
