//! Small form building blocks shared by the login, register, and upload
//! views.

use dioxus::prelude::*;

/// Labeled text input bound to a signal via `oninput`.
#[component]
pub fn FieldInput(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
) -> Element {
    let input_type = r#type;
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            input {
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// Inline error banner; renders nothing when there is no message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div {
                class: "error-banner",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
