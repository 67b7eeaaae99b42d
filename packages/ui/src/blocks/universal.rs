//! Concept answers: markdown summary, facts, related topics and widgets.

use dioxus::prelude::*;
use store::UniversalResult;

use crate::icons::{FaCircleInfo, FaLocationDot};
use crate::markdown::Markdown;
use crate::skeleton::SummarySkeleton;
use crate::Icon;

#[component]
pub fn UniversalBlock(
    data: UniversalResult,
    /// Whether the summary refresh is still running.
    #[props(default)]
    summary_loading: bool,
    /// Message of a failed summary refresh, if any.
    summary_error: Option<String>,
    /// Called with a related topic to start a new search.
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "block block--universal",

            if !data.summary.trim().is_empty() {
                article {
                    class: "article",
                    Markdown { source: data.summary.clone() }
                }
            }

            if summary_loading {
                SummarySkeleton {}
            }

            if let Some(err) = summary_error {
                p {
                    class: "notice notice--muted",
                    Icon { icon: FaCircleInfo, width: 12, height: 12 }
                    " Could not refresh the summary: {err}"
                }
            }

            if !data.facts.is_empty() {
                div {
                    class: "facts-grid",
                    for (i, fact) in data.facts.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "fact",
                            span { class: "fact__label", "{fact.label}" }
                            span { class: "fact__value", "{fact.value}" }
                        }
                    }
                }
            }

            if !data.related_topics.is_empty() {
                div {
                    class: "related",
                    h3 { class: "related__title", "Explore More" }
                    div {
                        class: "chips",
                        for topic in data.related_topics.iter().cloned() {
                            button {
                                key: "{topic}",
                                class: "chip",
                                onclick: {
                                    let topic = topic.clone();
                                    move |_| on_search.call(topic.clone())
                                },
                                "{topic}"
                            }
                        }
                    }
                }
            }

            for (i, widget) in data.widgets.iter().enumerate() {
                div {
                    key: "widget-{i}",
                    class: "widget",
                    div {
                        class: "widget__header",
                        Icon { icon: FaLocationDot, width: 16, height: 16 }
                        span { "Map: {widget.query}" }
                    }
                    div { class: "widget__placeholder" }
                }
            }
        }
    }
}
