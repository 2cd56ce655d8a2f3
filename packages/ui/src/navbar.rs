use dioxus::prelude::*;

/// Top navigation bar; the app decides what links and session controls
/// go inside.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}
