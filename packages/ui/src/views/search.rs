use dioxus::prelude::*;
use store::{ResultType, SearchResult, Website};

use crate::blocks::ResultBlock;
use crate::client::{use_api, use_config};
use crate::search_state::{run_search, use_search};
use crate::skeleton::SearchResultSkeleton;
use crate::web_results::WebResults;
use crate::website::{SourcesPanel, WebsiteModal};

/// Shared search results view.
///
/// Runs the instant-answer search whenever `query` changes, renders the block for
/// the result type, the sources panel for concept answers, and the ranked web
/// results underneath.
#[component]
pub fn SearchView(
    /// Query from the URL.
    query: String,
    /// Called to start a new search (related topics).
    on_search: EventHandler<String>,
) -> Element {
    let api = use_api();
    let refresh_summary = use_config().search.refresh_summary;
    let search = use_search();
    let mut selected = use_signal(|| Option::<Website>::None);

    let mut query_signal = use_signal(|| query.clone());
    if *query_signal.peek() != query {
        query_signal.set(query.clone());
    }

    use_effect(move || {
        let q = query_signal();
        if q.trim().is_empty() {
            return;
        }
        spawn(run_search(api.clone(), search, q, refresh_summary));
    });

    let state = search();
    let display_query = state.display_query().to_string();
    let sources = match &state.result {
        Some(SearchResult::Universal(u)) if state.shows_sidebar() => Some(u.websites().to_vec()),
        _ => None,
    };
    let show_web_results = !state.is_loading
        && matches!(state.result_type, Some(ResultType::Concept) | Some(ResultType::Error));

    rsx! {
        div {
            class: if sources.is_some() { "search-page search-page--with-sidebar" } else { "search-page" },

            main {
                class: "search-page__main",

                if let Some(corrected) = state.corrected_query.clone() {
                    p {
                        class: "corrected-query",
                        "Showing results for "
                        strong { "{corrected}" }
                    }
                }

                if state.is_loading {
                    SearchResultSkeleton {}
                } else if let Some(result) = state.result.clone() {
                    ResultBlock {
                        result,
                        summary_loading: state.is_summary_loading,
                        summary_error: state.summary_error.clone(),
                        on_search,
                    }
                } else if !state.has_searched {
                    p { class: "notice notice--muted", "Type a query to get started." }
                }

                if show_web_results && !display_query.is_empty() {
                    section {
                        class: "search-page__web",
                        h2 { class: "section-title", "Web results" }
                        WebResults { query: display_query.clone() }
                    }
                }
            }

            if let Some(websites) = sources.clone() {
                aside {
                    class: "search-page__sidebar",
                    SourcesPanel {
                        query: display_query.clone(),
                        websites,
                        on_select: move |site: Website| selected.set(Some(site)),
                    }
                }
            }

            if let Some(website) = selected() {
                WebsiteModal {
                    website,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
