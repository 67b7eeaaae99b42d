//! # Client configuration: `notice.toml`
//!
//! Defines the optional TOML file that tunes how the front end talks to the
//! backend (filename: [`ClientConfig::filename`] = `"notice.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://notice.example"   # empty = same origin as the page
//!
//! [search]
//! limit = 20               # results requested from /api/search
//! refresh_summary = true   # fetch /search/summary after a concept result
//!
//! [auth]
//! token_key = "notice_token"
//!
//! [status]
//! health_interval_secs = 30   # 0 disables the periodic /health check
//!
//! [index]
//! legacy = false   # true: submit URLs to /index-url instead of /api/submit
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config, parsed from TOML with a normalised base URL. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`SearchConfig`] | Result page size and the summary refresh switch. |
//! | [`AuthConfig`] | Storage key of the bearer token. |
//! | [`StatusConfig`] | Interval of the backend health check. |
//! | [`IndexConfig`] | Which endpoint URL submissions go to. |
//!
//! All structs implement `Default` with production values, so a missing or empty
//! file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::token::DEFAULT_TOKEN_KEY;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash. Empty means same origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_true")]
    pub refresh_summary: bool,
}

fn default_limit() -> u32 {
    20
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            refresh_summary: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Health check interval in seconds. 0 disables the check.
    #[serde(default = "default_health_interval")]
    pub health_interval_secs: u32,
}

fn default_health_interval() -> u32 {
    30
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            health_interval_secs: default_health_interval(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default)]
    pub legacy: bool,
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: &str) -> Self {
        Self {
            api: ApiConfig {
                base_url: normalize_base_url(base_url),
            },
            ..Self::default()
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notice.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = normalize_base_url(&config.api.base_url);
        Ok(config)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.search.limit, 20);
        assert!(config.search.refresh_summary);
        assert_eq!(config.auth.token_key, "notice_token");
        assert_eq!(config.status.health_interval_secs, 30);
        assert!(!config.index.legacy);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:4000/"

            [search]
            refresh_summary = false

            [index]
            legacy = true
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.search.limit, 20);
        assert!(!config.search.refresh_summary);
        assert!(config.index.legacy);
    }

    #[test]
    fn test_new_trims_base_url_and_keeps_defaults() {
        let config = ClientConfig::new(" https://notice.example/ ");
        assert_eq!(config.api.base_url, "https://notice.example");
        assert_eq!(config.status.health_interval_secs, 30);

        let polling_off = ClientConfig::from_toml("[status]\nhealth_interval_secs = 0\n").unwrap();
        assert_eq!(polling_off.status.health_interval_secs, 0);
    }
}
