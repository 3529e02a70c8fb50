//! Login / signup form. A successful submit hands the issued token to the
//! session, which hydrates the user; the app then switches to the dashboard.

use api::models::{LoginRequest, SignupRequest};
use api::validation::{validate_login, validate_signup};
use api::SessionError;
use dioxus::prelude::*;

use crate::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormKind {
    Login,
    Signup,
}

#[component]
pub fn AuthForm(kind: AuthFormKind, on_done: EventHandler<()>) -> Element {
    let session = use_session();
    let mut is_login = use_signal(|| kind == AuthFormKind::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let result = if is_login() {
                let request = LoginRequest {
                    email: email().trim().to_string(),
                    password: password(),
                };
                if let Err(e) = validate_login(&request) {
                    error.set(Some(e.to_string()));
                    return;
                }
                loading.set(true);
                session.sign_in(&request).await
            } else {
                let request = SignupRequest {
                    email: email().trim().to_string(),
                    username: username().trim().to_string(),
                    password: password(),
                    full_name: full_name().trim().to_string(),
                };
                if let Err(e) = validate_signup(&request) {
                    error.set(Some(e.to_string()));
                    return;
                }
                loading.set(true);
                session.sign_up(&request).await
            };

            loading.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(SessionError::NotAuthenticated) => error.set(Some(
                    "Signed in, but your profile could not be loaded. Please try again.".to_string(),
                )),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let toggle_kind = move |_| {
        is_login.set(!is_login());
        error.set(None);
        email.set(String::new());
        password.set(String::new());
        username.set(String::new());
        full_name.set(String::new());
    };

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "flex flex-col gap-4",

            if let Some(err) = error() {
                div {
                    class: "p-4 bg-red-50 border border-red-200 text-red-700 rounded-lg text-sm font-medium",
                    "{err}"
                }
            }

            if !is_login() {
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Full name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
            }

            input {
                class: "input",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                class: "input",
                r#type: "password",
                placeholder: if is_login() { "Password" } else { "Password (min 8 characters)" },
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                class: "btn btn-primary w-full",
                r#type: "submit",
                disabled: loading(),
                if loading() {
                    "Please wait..."
                } else if is_login() {
                    "Log in"
                } else {
                    "Create account"
                }
            }

            p {
                class: "text-sm text-slate-600 text-center",
                if is_login() { "No account yet? " } else { "Already have an account? " }
                button {
                    class: "text-blue-600 font-medium",
                    r#type: "button",
                    onclick: toggle_kind,
                    if is_login() { "Sign up" } else { "Log in" }
                }
            }
        }
    }
}
