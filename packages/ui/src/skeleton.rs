use dioxus::prelude::*;

#[component]
pub fn Skeleton(#[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div { class: "skeleton {class}" }
    }
}

/// Placeholder for the result area while a search is in flight.
#[component]
pub fn SearchResultSkeleton() -> Element {
    rsx! {
        div {
            class: "skeleton-stack",
            div {
                class: "skeleton-group",
                Skeleton { class: "skeleton--title" }
                Skeleton { class: "skeleton--subtitle" }
            }
            div {
                class: "skeleton-group",
                Skeleton { class: "skeleton--line" }
                Skeleton { class: "skeleton--line" }
                Skeleton { class: "skeleton--line skeleton--short" }
                Skeleton { class: "skeleton--line" }
            }
            div {
                class: "skeleton-grid",
                for _ in 0..2 {
                    div {
                        class: "skeleton-group",
                        Skeleton { class: "skeleton--label" }
                        Skeleton { class: "skeleton--card" }
                    }
                }
            }
        }
    }
}

/// Placeholder shown under a concept result while its summary is refreshed.
#[component]
pub fn SummarySkeleton() -> Element {
    rsx! {
        div {
            class: "skeleton-group summary-skeleton",
            Skeleton { class: "skeleton--line" }
            Skeleton { class: "skeleton--line" }
            Skeleton { class: "skeleton--line skeleton--short" }
        }
    }
}
