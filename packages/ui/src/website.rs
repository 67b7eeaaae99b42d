//! Source websites: the side panel list and the in-page browser modal.

use dioxus::prelude::*;
use store::Website;

use crate::client::use_api;
use crate::icons::{FaArrowUpRightFromSquare, FaCopy, FaLock, FaXmark};
use crate::skeleton::Skeleton;
use crate::Icon;

const PREVIEW_PLACEHOLDER: &str = "https://placehold.co/400x300";

#[component]
pub fn WebsiteList(websites: Vec<Website>, on_select: EventHandler<Website>) -> Element {
    rsx! {
        div {
            class: "sources",
            h3 { class: "sources__title", "Sources" }
            ul {
                class: "sources__list",
                for site in websites {
                    li {
                        key: "{site.url}",
                        class: "source",
                        button {
                            class: "source__button",
                            onclick: {
                                let site = site.clone();
                                move |_| on_select.call(site.clone())
                            },
                            div {
                                class: "source__head",
                                img {
                                    class: "source__favicon",
                                    src: "https://www.google.com/s2/favicons?domain={site.url}&sz=32",
                                    alt: "",
                                }
                                span { class: "source__title", {site.display_title()} }
                            }
                            if let Some(snippet) = site.snippet.as_deref().filter(|s| !s.is_empty()) {
                                p { class: "source__snippet", "{snippet}" }
                            }
                        }
                        div {
                            class: "source__preview",
                            img {
                                src: site.image_url.clone().unwrap_or_else(|| PREVIEW_PLACEHOLDER.to_string()),
                                alt: site.display_title().to_string(),
                            }
                            div {
                                class: "source__preview-body",
                                h4 { {site.display_title()} }
                                p { "{site.url}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Side panel for a concept result.
///
/// Uses the websites carried by the result; when there are none, fetches them
/// from `POST /search/web` for `query`.
#[component]
pub fn SourcesPanel(query: String, websites: Vec<Website>, on_select: EventHandler<Website>) -> Element {
    let api = use_api();
    let has_own = !websites.is_empty();
    let mut input = use_signal(|| (query.clone(), has_own));
    if *input.peek() != (query.clone(), has_own) {
        input.set((query.clone(), has_own));
    }

    let fetched = use_resource(move || {
        let api = api.clone();
        let (query, has_own) = input();
        async move {
            if has_own || query.trim().is_empty() {
                return Ok(Vec::new());
            }
            api.search_web(&query).await.map_err(|e| {
                tracing::warn!("Failed to load sources: {}", e);
                e.to_string()
            })
        }
    });

    if has_own {
        return rsx! {
            WebsiteList { websites, on_select }
        };
    }

    let fetched = fetched.read().clone();
    match fetched {
        None => rsx! {
            div {
                class: "sources",
                h3 { class: "sources__title", "Sources" }
                for _ in 0..3 {
                    Skeleton { class: "skeleton--card" }
                }
            }
        },
        Some(Ok(sites)) if !sites.is_empty() => rsx! {
            WebsiteList { websites: sites, on_select }
        },
        Some(Ok(_)) => rsx! {},
        Some(Err(e)) => rsx! {
            div {
                class: "sources",
                h3 { class: "sources__title", "Sources" }
                p { class: "notice notice--muted", "{e}" }
            }
        },
    }
}

/// Full-screen modal that shows a source in an iframe behind a browser-like bar.
#[component]
pub fn WebsiteModal(website: Website, on_close: EventHandler<()>) -> Element {
    let url = website.url.clone();
    let open_url = url.clone();
    let copy_url = url.clone();

    rsx! {
        div {
            class: "website-modal",
            div {
                class: "website-modal__backdrop",
                onclick: move |_| on_close.call(()),
            }
            div {
                class: "website-modal__window",
                div {
                    class: "website-modal__bar",
                    div {}
                    div {
                        class: "website-modal__address",
                        Icon { icon: FaLock, width: 12, height: 12 }
                        span { class: "website-modal__url", "{url}" }
                        div {
                            class: "website-modal__actions",
                            button {
                                title: "Open in new tab",
                                onclick: move |_| open_in_new_tab(&open_url),
                                Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                            }
                            button {
                                title: "Copy URL",
                                onclick: move |_| copy_to_clipboard(&copy_url),
                                Icon { icon: FaCopy, width: 12, height: 12 }
                            }
                        }
                    }
                    button {
                        class: "website-modal__close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }
                div {
                    class: "website-modal__body",
                    iframe {
                        src: "{url}",
                        title: website.display_title().to_string(),
                        "sandbox": "allow-same-origin allow-scripts allow-popups allow-forms",
                    }
                }
            }
        }
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("open {}", url);
}

fn copy_to_clipboard(url: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(url);
        tracing::debug!("Copied {}", url);
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("copy {}", url);
}
