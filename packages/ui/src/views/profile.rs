//! The signed-in user's profile: view, edit, and switch between Builder and
//! Hustler. Both edits go through the session so the new user record is
//! visible app-wide as soon as the backend returns it.

use api::models::{split_list, ProfileUpdate};
use dioxus::prelude::*;

use crate::widgets::{ModeBadge, SkillTags};
use crate::{use_auth, use_session};

#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let session = use_session();
    let mut editing = use_signal(|| false);
    let mut bio = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut interests = use_signal(String::new);
    let mut profile_image = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let Some(user) = auth().user else {
        return rsx! {};
    };

    let start_editing = {
        let user = user.clone();
        move |_: MouseEvent| {
            bio.set(user.bio.clone().unwrap_or_default());
            skills.set(user.skills().join(", "));
            interests.set(user.interests().join(", "));
            profile_image.set(user.profile_image.clone().unwrap_or_default());
            error.set(None);
            editing.set(true);
        }
    };

    let save_session = session.clone();
    let handle_save = move |_: MouseEvent| {
        let session = save_session.clone();
        spawn(async move {
            let image = profile_image().trim().to_string();
            let update = ProfileUpdate {
                bio: Some(bio().trim().to_string()),
                skills: Some(split_list(&skills())),
                interests: Some(split_list(&interests())),
                profile_image: (!image.is_empty()).then_some(image),
            };

            saving.set(true);
            let result = session.update_profile(&update).await;
            saving.set(false);
            match result {
                Ok(_) => editing.set(false),
                Err(e) => error.set(Some(format!("Failed to update profile: {e}"))),
            }
        });
    };

    let next_mode = user.mode.toggled();
    let handle_toggle = move |_: MouseEvent| {
        let session = session.clone();
        spawn(async move {
            if let Err(e) = session.toggle_mode(next_mode).await {
                error.set(Some(format!("Failed to switch mode: {e}")));
            }
        });
    };

    rsx! {
        div {
            class: "w-full flex justify-center",
            div {
                class: "max-w-2xl w-full bg-white rounded-2xl border border-slate-200 shadow-sm p-8",

                div {
                    class: "flex justify-between items-start mb-8",
                    div {
                        class: "flex items-center gap-4",
                        if let Some(src) = user.profile_image.as_deref() {
                            img { class: "w-20 h-20 rounded-full object-cover", src: "{src}" }
                        }
                        div {
                            h1 { class: "text-3xl font-bold text-slate-900", "{user.full_name}" }
                            p { class: "text-slate-500", "@{user.username}" }
                            p { class: "text-slate-400 text-sm mt-1", "{user.email}" }
                        }
                    }
                    if editing() {
                        button { class: "btn", onclick: move |_| editing.set(false), "Cancel" }
                    } else {
                        button { class: "btn", onclick: start_editing, "Edit Profile" }
                    }
                }

                if let Some(err) = error() {
                    div { class: "p-3 mb-4 bg-red-50 text-red-700 rounded-lg text-sm", "{err}" }
                }

                div {
                    class: "flex items-center justify-between p-4 bg-slate-50 rounded-lg mb-6",
                    div {
                        p { class: "text-sm text-slate-600 mb-1", "Current mode" }
                        ModeBadge { mode: user.mode }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_toggle,
                        "Switch to {next_mode.label()}"
                    }
                }

                if editing() {
                    div {
                        class: "flex flex-col gap-3",
                        textarea {
                            class: "input h-24",
                            placeholder: "Tell people about yourself",
                            value: bio(),
                            oninput: move |evt: FormEvent| bio.set(evt.value()),
                        }
                        input {
                            class: "input",
                            placeholder: "Skills, comma separated",
                            value: skills(),
                            oninput: move |evt: FormEvent| skills.set(evt.value()),
                        }
                        input {
                            class: "input",
                            placeholder: "Interests, comma separated",
                            value: interests(),
                            oninput: move |evt: FormEvent| interests.set(evt.value()),
                        }
                        input {
                            class: "input",
                            placeholder: "Profile image URL",
                            value: profile_image(),
                            oninput: move |evt: FormEvent| profile_image.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: saving(),
                            onclick: handle_save,
                            if saving() { "Saving..." } else { "Save Changes" }
                        }
                    }
                } else {
                    div {
                        class: "flex flex-col gap-4",
                        div {
                            h2 { class: "font-semibold text-slate-900", "Bio" }
                            p { class: "text-slate-600", {user.bio.clone().unwrap_or_else(|| "No bio yet.".to_string())} }
                        }
                        div {
                            h2 { class: "font-semibold text-slate-900", "Skills" }
                            SkillTags { items: user.skills() }
                        }
                        div {
                            h2 { class: "font-semibold text-slate-900", "Interests" }
                            SkillTags { items: user.interests() }
                        }
                    }
                }
            }
        }
    }
}
