use dioxus::prelude::*;

/// Row of small tags, rendered only when there is something to show.
#[component]
pub fn SkillTags(items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex flex-wrap gap-2 mt-3",
            for (idx, item) in items.iter().enumerate() {
                span {
                    key: "{idx}",
                    class: "px-2 py-1 bg-slate-100 text-slate-600 rounded text-xs font-medium",
                    "{item}"
                }
            }
        }
    }
}
