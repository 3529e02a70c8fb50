use dioxus::prelude::*;
use ui::use_auth;
use ui::views::DashboardView;

use crate::views::Spinner;
use crate::Route;

/// Signed-in area. Sends the visitor back to the landing page once the
/// session settles without a user (never signed in, expired token, logout).
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            tracing::debug!("No active session, redirecting to landing page");
            nav.replace(Route::Landing {});
        }
    });

    let state = auth();
    if state.loading || state.user.is_none() {
        return rsx! { Spinner {} };
    }

    rsx! {
        DashboardView {}
    }
}
