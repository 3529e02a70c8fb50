use api::models::NetworkQuery;
use api::{Mode, User};
use dioxus::prelude::*;

use crate::use_session;
use crate::widgets::{FilterButton, ModeBadge, SkillTags};

/// Member directory with an all / builders / hustlers filter.
#[component]
pub fn NetworkDirectory() -> Element {
    let session = use_session();
    let mut filter = use_signal(|| Option::<Mode>::None);

    let members = use_resource(move || {
        let session = session.clone();
        let query = match filter() {
            Some(mode) => NetworkQuery::with_mode(mode),
            None => NetworkQuery::default(),
        };
        async move { session.client().network().members(&query).await }
    });

    rsx! {
        div {
            h1 { class: "text-3xl font-bold text-slate-900", "Network" }
            p { class: "text-slate-600 mt-1 mb-6", "Connect with builders and hustlers on campus" }

            div {
                class: "flex gap-2 mb-6",
                FilterButton {
                    active: filter().is_none(),
                    label: "All Members",
                    onclick: move |_| filter.set(None),
                }
                FilterButton {
                    active: filter() == Some(Mode::Builder),
                    label: "🔨 Builders",
                    onclick: move |_| filter.set(Some(Mode::Builder)),
                }
                FilterButton {
                    active: filter() == Some(Mode::Hustler),
                    label: "⚡ Hustlers",
                    onclick: move |_| filter.set(Some(Mode::Hustler)),
                }
            }

            match &*members.read_unchecked() {
                None => rsx! {
                    p { class: "text-slate-500", "Loading members..." }
                },
                Some(Err(e)) => rsx! {
                    div { class: "p-4 bg-red-50 text-red-700 rounded-lg", "Could not load members: {e}" }
                },
                Some(Ok(users)) if users.is_empty() => rsx! {
                    p { class: "text-center py-16 text-slate-500", "No members found." }
                },
                Some(Ok(users)) => rsx! {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for user in users.iter() {
                            UserCard { key: "{user.id}", user: user.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn UserCard(user: User) -> Element {
    rsx! {
        div {
            class: "bg-white border border-slate-200 rounded-lg p-4",
            div {
                class: "flex justify-between items-start",
                div {
                    h3 { class: "font-semibold text-slate-900", "{user.display_name()}" }
                    p { class: "text-sm text-slate-500", "@{user.username}" }
                }
                ModeBadge { mode: user.mode }
            }
            if let Some(bio) = user.bio.as_deref() {
                p { class: "text-sm text-slate-600 mt-3", "{bio}" }
            }
            SkillTags { items: user.skills() }
        }
    }
}
