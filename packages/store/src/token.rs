//! # Bearer token storage
//!
//! The only state the client persists is the auth token string, stored under a
//! fixed key ([`DEFAULT_TOKEN_KEY`]). [`TokenStore`] abstracts where it lives:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, and any build without persistence |
//! | [`crate::WebStorage`] | browser `localStorage` (WASM + `web` feature) |
//! | [`crate::FileStore`] | native builds, a file under the platform data directory |
//!
//! Implementations swallow storage errors: an unavailable store behaves as "no
//! token", which leaves the user signed out rather than breaking the page.

pub const DEFAULT_TOKEN_KEY: &str = "notice_token";

/// Synchronous key/value slot for the bearer token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Normalise a stored token: blank values count as absent.
pub(crate) fn non_blank(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
