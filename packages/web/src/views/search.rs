use dioxus::prelude::*;
use ui::views::SearchView;

use crate::Route;

/// `/search?query=...`. An empty query sends the user back home.
#[component]
pub fn Search(query: String) -> Element {
    let nav = use_navigator();

    if query.trim().is_empty() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        SearchView {
            query,
            on_search: move |query: String| {
                nav.push(Route::Search { query });
            },
        }
    }
}
