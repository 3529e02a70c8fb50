//! Session context and hooks for the UI.

use std::rc::Rc;

use api::{ApiClient, ApiConfig, SessionManager, SessionState};
use dioxus::prelude::*;

use crate::credentials::make_credential_store;

/// Shared handle to the session manager.
pub type Session = Rc<SessionManager>;

/// Get the current session state.
/// Returns a signal that updates on login, logout and profile changes.
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the session manager, for login/logout and API calls.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session: Session = use_hook(|| {
        let config = ApiConfig::from_env();
        tracing::info!("Using API at {}", config.base_url());
        let client = ApiClient::with_reqwest(config, make_credential_store());
        Rc::new(SessionManager::new(client))
    });

    let auth_state = use_signal({
        let session = session.clone();
        move || session.state()
    });

    // Mirror every session change into the signal
    use_hook({
        let session = session.clone();
        move || {
            session.subscribe(move |state| {
                let mut auth_state = auth_state;
                auth_state.set(state.clone());
            })
        }
    });

    // Resolve a stored credential on mount
    use_future({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { session.init().await }
        }
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| session.clone());

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| session.logout(),
            "{label}"
        }
    }
}
