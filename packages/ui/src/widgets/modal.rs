use dioxus::prelude::*;

/// Centered dialog with a title bar over a dimmed backdrop.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn Modal(
    title: String,
    #[props(default)] subtitle: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/40",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-2xl shadow-xl max-w-lg w-full mx-4 p-6",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "flex justify-between items-start mb-4",
                    div {
                        h2 { class: "text-xl font-bold text-slate-900", "{title}" }
                        if let Some(subtitle) = subtitle {
                            p { class: "text-sm text-slate-500 mt-1", "{subtitle}" }
                        }
                    }
                    button {
                        class: "text-slate-400 hover:text-slate-600 text-xl leading-none",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
