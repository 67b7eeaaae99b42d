//! Ranked web results from `GET /api/search`.

use api::{InstantAnswer, SearchHit, SearchOptions, SearchResponse};
use dioxus::prelude::*;
use store::widgets::{display_url, result_count_label, score_badge};

use crate::client::{use_api, use_config};
use crate::skeleton::SearchResultSkeleton;

#[component]
pub fn WebResults(query: String) -> Element {
    let api = use_api();
    let config = use_config();
    let mut query_signal = use_signal(|| query.clone());
    if *query_signal.peek() != query {
        query_signal.set(query.clone());
    }

    let response = use_resource(move || {
        let api = api.clone();
        let options = SearchOptions::with_limit(config.search.limit);
        let query = query_signal();
        async move { api.search(&query, &options).await.map_err(|e| e.to_string()) }
    });

    let response = response.read().clone();
    match response {
        None => rsx! {
            SearchResultSkeleton {}
        },
        Some(Err(e)) => rsx! {
            div { class: "notice notice--error", role: "alert", "{e}" }
        },
        Some(Ok(resp)) => {
            let SearchResponse { results, total, instant_answer, .. } = resp;
            let total = if total > 0 { total as usize } else { results.len() };
            rsx! {
                if let Some(answer) = instant_answer {
                    InstantAnswerCard { answer }
                }
                if results.is_empty() {
                    div {
                        class: "empty-state",
                        p { class: "empty-state__title", "No results found for \u{201c}{query}\u{201d}" }
                        p { class: "empty-state__hint", "Try different keywords or submit a URL to index" }
                    }
                } else {
                    div {
                        class: "web-results",
                        p { class: "web-results__count", {result_count_label(total)} }
                        for hit in results {
                            ResultCard { key: "{hit.id}{hit.url}", hit }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultCard(hit: SearchHit) -> Element {
    let url = display_url(&hit.url);
    let title = hit.display_title().to_string();
    rsx! {
        article {
            class: "result",
            div {
                class: "result__meta",
                span { class: "result__url", "{url}" }
                if let Some(score) = hit.score {
                    span { class: "score-badge", {score_badge(score)} }
                }
            }
            h3 {
                a {
                    class: "result__title",
                    href: "{hit.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{title}"
                }
            }
            p { class: "result__snippet", "{hit.snippet}" }
        }
    }
}

#[component]
fn InstantAnswerCard(answer: InstantAnswer) -> Element {
    rsx! {
        div {
            class: "instant-answer",
            span { class: "instant-answer__label", {answer.label()} }
            div { class: "instant-answer__value", "{answer.value}" }
        }
    }
}
