//! Catch-all page for unknown paths.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "auth-container",

            h1 { class: "auth-title", "Page not found" }
            p { class: "auth-subtitle", "There is nothing at /{path}" }

            div {
                class: "auth-links",
                Link { to: Route::Dashboard {}, "Back to dashboard" }
            }
        }
    }
}
