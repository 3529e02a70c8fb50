//! Public landing page with the sign-in / sign-up form.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::{AuthForm, AuthFormKind};

use crate::views::Spinner;
use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut form = use_signal(|| Option::<AuthFormKind>::None);

    // Already signed in: go straight to the dashboard
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            tracing::debug!("Session active, redirecting to dashboard");
            nav.replace(Route::Dashboard {});
        }
    });

    if auth().loading {
        return rsx! { Spinner {} };
    }

    rsx! {
        div {
            class: "min-h-screen bg-white flex flex-col",

            header {
                class: "w-full border-b border-slate-100 flex justify-center",
                div {
                    class: "w-full max-w-6xl flex h-16 items-center justify-between px-4",
                    span { class: "text-xl font-bold tracking-tight text-slate-900", "Workforce" }
                    div {
                        class: "flex gap-2",
                        button { class: "btn", onclick: move |_| form.set(Some(AuthFormKind::Login)), "Log in" }
                        button { class: "btn btn-primary", onclick: move |_| form.set(Some(AuthFormKind::Signup)), "Get started" }
                    }
                }
            }

            main {
                class: "flex-1 flex flex-col items-center px-4 py-16 gap-12",

                section {
                    class: "text-center max-w-2xl",
                    h1 { class: "text-4xl font-bold text-slate-900", "Choose Your Path" }
                    p {
                        class: "text-slate-600 mt-4",
                        "Select whether you're a Builder offering opportunities or a Hustler seeking them"
                    }
                    div {
                        class: "flex justify-center gap-4 mt-6",
                        span { class: "px-4 py-2 rounded-lg bg-blue-100 text-blue-700 font-semibold", "🔨 Builder" }
                        span { class: "px-4 py-2 rounded-lg bg-teal-100 text-teal-700 font-semibold", "⚡ Hustler" }
                    }
                }

                if let Some(kind) = form() {
                    div {
                        class: "w-full max-w-md bg-white border border-slate-200 rounded-2xl shadow-sm p-8",
                        AuthForm {
                            key: "{kind:?}",
                            kind,
                            on_done: move |_| {
                                nav.replace(Route::Dashboard {});
                            },
                        }
                    }
                }

                section {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-6 max-w-5xl w-full",
                    Feature { title: "Network Directory", description: "Discover builders and hustlers in your community" }
                    Feature { title: "Opportunity Board", description: "Post and find student-to-student projects and bounties" }
                    Feature { title: "Dual Modes", description: "Toggle between Builder and Hustler modes seamlessly" }
                }
            }
        }
    }
}

#[component]
fn Feature(title: String, description: String) -> Element {
    rsx! {
        div {
            class: "border border-slate-200 rounded-lg p-6",
            h3 { class: "font-semibold text-slate-900", "{title}" }
            p { class: "text-sm text-slate-600 mt-2", "{description}" }
        }
    }
}
