use api::Mode;
use dioxus::prelude::*;

/// Pill showing whether a user is a Builder or a Hustler.
#[component]
pub fn ModeBadge(mode: Mode) -> Element {
    let class = match mode {
        Mode::Builder => "bg-blue-100 text-blue-700",
        Mode::Hustler => "bg-teal-100 text-teal-700",
    };
    let icon = match mode {
        Mode::Builder => "🔨",
        Mode::Hustler => "⚡",
    };

    rsx! {
        span {
            class: "inline-flex items-center gap-1 px-2.5 py-1 rounded-full text-xs font-semibold {class}",
            "{icon} {mode.label()}"
        }
    }
}
