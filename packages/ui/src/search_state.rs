//! Search state context.
//!
//! The application shell owns one [`SearchUiState`] signal; pages and the navbar
//! read it through [`use_search`]. [`run_search`] is the only path that issues
//! network requests for it.

use dioxus::prelude::*;
use store::SearchUiState;

use crate::client::Api;

pub fn use_search() -> Signal<SearchUiState> {
    use_context::<Signal<SearchUiState>>()
}

#[component]
pub fn SearchProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SearchUiState::new()));

    rsx! {
        {children}
    }
}

/// Run a fenced instant-answer search and the optional summary refresh.
///
/// Responses that arrive after a newer search started are dropped by the state.
pub async fn run_search(api: Api, mut state: Signal<SearchUiState>, query: String, refresh_summary: bool) {
    let Some(id) = state.write().begin_search(&query) else {
        return;
    };
    let query = query.trim().to_string();
    tracing::info!("Searching for {:?}", query);

    let outcome = api.search_instant(&query).await.map_err(|e| {
        tracing::error!("Search failed: {}", e);
        e.to_string()
    });

    let wants_summary = {
        let mut s = state.write();
        s.finish_search(id, outcome, refresh_summary) && s.is_summary_loading
    };
    if !wants_summary {
        return;
    }

    let update = api.search_summary(&query).await.map_err(|e| e.to_string());
    state.write().finish_summary(id, update);
}
