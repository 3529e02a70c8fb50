use dioxus::prelude::*;

/// Full-page placeholder while the stored session is being resolved.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center",
            div { class: "spinner" }
        }
    }
}
