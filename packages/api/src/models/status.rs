//! Backend health and crawler status.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub dependencies: HealthDependencies,
}

/// Dependency states; each is `"up"`/`"down"` or a nested object, kept opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthDependencies {
    #[serde(default)]
    pub postgres: Option<serde_json::Value>,
    #[serde(default)]
    pub meilisearch: Option<serde_json::Value>,
    #[serde(default)]
    pub gemini: Option<serde_json::Value>,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CrawlerStatus {
    #[serde(default)]
    pub crawler: Option<CrawlerStats>,
    #[serde(default)]
    pub queue: QueueStats,
    #[serde(default)]
    pub meilisearch_documents: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CrawlerStats {
    #[serde(default)]
    pub pages_crawled: u64,
    #[serde(default)]
    pub pages_failed: u64,
    #[serde(default)]
    pub links_discovered: u64,
    #[serde(default)]
    pub running: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueueStats {
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub in_progress: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub failed: u64,
}
