//! Personal knowledge graph panels for the profile page.
//!
//! Both requests are issued on every mount; nothing is cached between visits.

use api::{KgContext, KnowledgeGraph};
use dioxus::prelude::*;

use crate::client::use_api;
use crate::skeleton::Skeleton;

/// Relationships shown before the list is cut off.
const MAX_RELATIONSHIPS: usize = 20;

#[component]
pub fn KnowledgeGraphPanel() -> Element {
    let api = use_api();
    let graph = use_resource(move || {
        let api = api.clone();
        async move { api.my_kg().await.map_err(|e| e.to_string()) }
    });

    let graph: Option<Result<KnowledgeGraph, String>> = graph.read().clone();
    match graph {
        None => rsx! {
            section {
                class: "kg",
                h2 { class: "kg__title", "Knowledge graph" }
                Skeleton { class: "skeleton--card" }
            }
        },
        Some(Err(e)) => rsx! {
            section {
                class: "kg",
                h2 { class: "kg__title", "Knowledge graph" }
                p { class: "notice notice--error", "{e}" }
            }
        },
        Some(Ok(g)) if g.is_empty() => rsx! {
            section {
                class: "kg",
                h2 { class: "kg__title", "Knowledge graph" }
                p { class: "notice notice--muted", "Search a few topics and your graph will start to grow." }
            }
        },
        Some(Ok(g)) => {
            let groups: Vec<(String, Vec<(String, String)>)> = g
                .by_type()
                .into_iter()
                .map(|(kind, entities)| {
                    let items = entities
                        .into_iter()
                        .map(|e| (e.name.clone(), format!("{:.2}", e.weight)))
                        .collect();
                    (kind.to_string(), items)
                })
                .collect();
            let relationships: Vec<(String, String, String)> = g
                .ranked_relationships()
                .into_iter()
                .take(MAX_RELATIONSHIPS)
                .map(|r| {
                    (
                        r.from.clone(),
                        r.kind.replace('_', " "),
                        r.to.clone(),
                    )
                })
                .collect();

            rsx! {
                section {
                    class: "kg",
                    h2 { class: "kg__title", "Knowledge graph" }
                    p {
                        class: "kg__counts",
                        "{g.entity_count} entities \u{b7} {g.relationship_count} relationships"
                    }
                    div {
                        class: "kg__groups",
                        for (kind, items) in groups {
                            div {
                                key: "{kind}",
                                class: "kg__group",
                                h3 { class: "kg__group-title", "{kind}" }
                                ul {
                                    for (name, weight) in items {
                                        li {
                                            class: "kg__entity",
                                            span { "{name}" }
                                            span { class: "kg__weight", "{weight}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if !relationships.is_empty() {
                        h3 { class: "kg__group-title", "Relationships" }
                        ul {
                            class: "kg__relationships",
                            for (from, kind, to) in relationships {
                                li { "{from} " em { "{kind}" } " {to}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TopInterests() -> Element {
    let api = use_api();
    let context = use_resource(move || {
        let api = api.clone();
        async move { api.my_context().await.map_err(|e| e.to_string()) }
    });

    let context: Option<Result<KgContext, String>> = context.read().clone();
    match context {
        Some(Ok(ctx)) if ctx.has_context && !ctx.top_interests.is_empty() => rsx! {
            section {
                class: "interests",
                h2 { class: "kg__title", "Top interests" }
                div {
                    class: "chips",
                    for interest in ctx.top_interests {
                        span {
                            class: "chip chip--static",
                            title: "{interest.kind}",
                            "{interest.term}"
                        }
                    }
                }
            }
        },
        Some(Err(e)) => {
            tracing::debug!("Interests unavailable: {}", e);
            rsx! {}
        }
        _ => rsx! {},
    }
}
