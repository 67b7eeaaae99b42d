//! Backend health indicator for the navbar, and crawler stats for the home page.

use api::{CrawlerStatus, HealthResponse};
use dioxus::prelude::*;

use crate::client::{sleep_secs, use_api, use_config};
use crate::icons::FaCircle;
use crate::Icon;

#[derive(Clone, Debug, PartialEq)]
pub enum Health {
    Checking,
    Up(HealthResponse),
    Degraded(HealthResponse),
    Down(String),
}

impl Health {
    pub fn from_response(result: Result<HealthResponse, String>) -> Self {
        match result {
            Ok(h) if h.is_ok() => Self::Up(h),
            Ok(h) => Self::Degraded(h),
            Err(e) => Self::Down(e),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Checking => "backend-status backend-status--checking",
            Self::Up(_) => "backend-status backend-status--up",
            Self::Degraded(_) => "backend-status backend-status--degraded",
            Self::Down(_) => "backend-status backend-status--down",
        }
    }

    fn title(&self) -> String {
        match self {
            Self::Checking => "Checking backend...".to_string(),
            Self::Up(h) => format!("{} {} is up", h.service, h.version),
            Self::Degraded(h) => format!("{} is {}", h.service, h.status),
            Self::Down(e) => format!("Backend unreachable: {e}"),
        }
    }
}

/// A small dot showing the result of the periodic `/health` check.
///
/// - **Up**: green
/// - **Degraded** (`status` other than `ok`): orange
/// - **Down** (request failed): red
#[component]
pub fn BackendStatus() -> Element {
    let api = use_api();
    let interval = use_config().status.health_interval_secs as u64;
    let mut health = use_signal(|| Health::Checking);

    use_future(move || {
        let api = api.clone();
        async move {
            loop {
                let next = Health::from_response(api.health().await.map_err(|e| e.to_string()));
                if *health.peek() != next {
                    if let Health::Down(e) = &next {
                        tracing::warn!("Backend health check failed: {}", e);
                    }
                    health.set(next);
                }
                if interval == 0 {
                    break;
                }
                sleep_secs(interval).await;
            }
        }
    });

    let state = health();
    rsx! {
        span {
            class: state.class(),
            title: state.title(),
            Icon { icon: FaCircle, width: 8, height: 8 }
        }
    }
}

/// Crawler and queue counters from `/api/crawler/status`.
#[component]
pub fn CrawlerStats() -> Element {
    let api = use_api();
    let status = use_resource(move || {
        let api = api.clone();
        async move { api.crawler_status().await.map_err(|e| e.to_string()) }
    });

    let status: Option<Result<CrawlerStatus, String>> = status.read().clone();
    match status {
        Some(Ok(s)) => {
            let crawler = s.crawler.unwrap_or_default();
            let running = if crawler.running { "running" } else { "idle" };
            rsx! {
                div {
                    class: "crawler-stats",
                    Stat { label: "Indexed documents", value: s.meilisearch_documents }
                    Stat { label: "Pages crawled", value: crawler.pages_crawled }
                    Stat { label: "Queue pending", value: s.queue.pending }
                    Stat { label: "In progress", value: s.queue.in_progress }
                    span { class: "crawler-stats__state", "Crawler {running}" }
                }
            }
        }
        Some(Err(e)) => {
            tracing::debug!("Crawler status unavailable: {}", e);
            rsx! {}
        }
        None => rsx! {},
    }
}

#[component]
fn Stat(label: &'static str, value: u64) -> Element {
    rsx! {
        div {
            class: "stat",
            span { class: "stat__value", "{value}" }
            span { class: "stat__label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_states() {
        let ok = HealthResponse {
            status: "ok".to_string(),
            service: "notice".to_string(),
            version: "0.1.0".to_string(),
            ..Default::default()
        };
        assert!(matches!(Health::from_response(Ok(ok.clone())), Health::Up(_)));

        let degraded = HealthResponse {
            status: "degraded".to_string(),
            ..ok
        };
        let health = Health::from_response(Ok(degraded));
        assert!(matches!(health, Health::Degraded(_)));
        assert_eq!(health.title(), "notice is degraded");

        let down = Health::from_response(Err("connection refused".to_string()));
        assert_eq!(down.title(), "Backend unreachable: connection refused");
    }
}
