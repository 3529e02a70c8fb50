use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Dashboard, Landing};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // `launch` installs the tracing subscriber before rendering
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Workforce" }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
