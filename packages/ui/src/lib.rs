//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const NOTICE_CSS: Asset = asset!("/assets/notice.css");

mod client;
pub use client::{load_config, make_client, use_api, use_config, Api, ApiProvider, PlatformTokens};

mod auth;
pub use auth::{use_auth, use_session, AuthProvider, LogoutButton, Session};
pub use api::AuthState;

mod search_state;
pub use search_state::{run_search, use_search, SearchProvider};

pub mod blocks;
pub use blocks::ResultBlock;

pub mod markdown;
pub use markdown::Markdown;

mod navbar;
pub use navbar::Navbar;

mod search_bar;
pub use search_bar::SearchBar;

mod backend_status;
pub use backend_status::{BackendStatus, CrawlerStats, Health};

mod skeleton;
pub use skeleton::{SearchResultSkeleton, Skeleton, SummarySkeleton};

mod website;
pub use website::{SourcesPanel, WebsiteList, WebsiteModal};

mod web_results;
pub use web_results::WebResults;

pub mod submit_url;
pub use submit_url::SubmitUrl;

mod knowledge_graph;
pub use knowledge_graph::{KnowledgeGraphPanel, TopInterests};

pub mod views;

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../assets/notice.css");

    fn declared_vars(block: &str) -> Vec<&str> {
        block
            .lines()
            .filter_map(|line| line.trim().strip_prefix("--"))
            .filter_map(|decl| decl.split(':').next())
            .collect()
    }

    #[test]
    fn test_light_scheme_overrides_surface_and_text_colors() {
        let (_, light) = STYLESHEET
            .split_once("@media (prefers-color-scheme: light)")
            .expect("stylesheet follows the system theme");
        let light = light.split("@media").next().unwrap_or(light);
        let overridden = declared_vars(light);
        for var in ["bg", "surface", "surface-2", "border", "text", "text-secondary"] {
            assert!(overridden.contains(&var), "--{} missing from light palette", var);
        }

        let (dark_root, _) = STYLESHEET.split_once("* {").unwrap();
        assert!(dark_root.contains("color-scheme: light dark"));
        for var in overridden {
            assert!(declared_vars(dark_root).contains(&var), "--{} has no dark default", var);
        }
    }
}
