use dioxus::prelude::*;

#[component]
pub fn FilterButton(active: bool, label: String, onclick: EventHandler<()>) -> Element {
    let class = if active {
        "bg-slate-900 text-white"
    } else {
        "bg-slate-100 text-slate-700 hover:bg-slate-200"
    };

    rsx! {
        button {
            class: "px-4 py-2 rounded-lg text-sm font-medium transition-all {class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
