use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::backend_status::CrawlerStats;
use crate::search_bar::SearchBar;
use crate::search_state::use_search;
use crate::submit_url::SubmitUrl;

/// Landing page: search box, URL submission and index stats.
#[component]
pub fn HomeView(on_search: EventHandler<String>) -> Element {
    let auth = use_auth();
    let mut search = use_search();

    // Navigating home clears the previous search
    use_hook(move || search.write().reset_search());

    rsx! {
        div {
            class: "home",
            h1 { class: "home__brand", "Notice" }
            SearchBar { on_search, autofocus: true }

            if let Some(user) = auth().user {
                p {
                    class: "home__welcome",
                    "Welcome back, "
                    span { class: "home__username", "{user.username}" }
                    ". Your personal research assistant is ready."
                }
            }

            SubmitUrl {}
            CrawlerStats {}
        }
    }
}
