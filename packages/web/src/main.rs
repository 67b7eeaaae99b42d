use dioxus::prelude::*;
use tracing::Level;

use ui::{ApiProvider, AuthProvider, SearchProvider};
use views::{AppLayout, Home, Login, Profile, Register, Search};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/search?:query")]
        Search { query: String },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/profile")]
        Profile {},
}

fn main() {
    // A subscriber may already be installed by the launcher.
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Notice" }
        document::Link { rel: "stylesheet", href: ui::NOTICE_CSS }

        ApiProvider {
            AuthProvider {
                SearchProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
