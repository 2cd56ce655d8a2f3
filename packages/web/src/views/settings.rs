//! Settings view with session controls.

use dioxus::prelude::*;

use ui::{use_auth, LogoutButton};

use crate::views::PortalNav;

#[component]
pub fn Settings() -> Element {
    let auth = use_auth();

    let email = auth()
        .user
        .map(|u| u.email)
        .unwrap_or_default();

    rsx! {
        PortalNav {}

        div {
            class: "page",

            h1 { "Settings" }

            div {
                class: "settings-section",
                h2 { "Session" }
                p { "Signed in as {email}." }
                p {
                    class: "settings-note",
                    "Signing out clears the cached session token on this device."
                }
                LogoutButton { class: "danger" }
            }
        }
    }
}
