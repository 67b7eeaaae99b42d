//! # localStorage token store: browser-side persistence
//!
//! [`WebStorage`] keeps the bearer token in `window.localStorage` under a fixed key
//! (default `"notice_token"`). It is a plain key holder: every operation looks the
//! storage object up again, so the struct is `Clone` and cheap to pass around.
//!
//! All errors (no window, storage disabled, quota) are swallowed and logged; reads
//! then return `None`.

use web_sys::Storage;

use crate::token::{non_blank, TokenStore, DEFAULT_TOKEN_KEY};

#[derive(Clone, Debug)]
pub struct WebStorage {
    key: String,
}

impl WebStorage {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Default for WebStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for WebStorage {
    fn get(&self) -> Option<String> {
        let storage = Self::storage()?;
        non_blank(storage.get_item(&self.key).ok().flatten())
    }

    fn set(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(&self.key, token).is_err() {
            tracing::warn!("failed to write token to localStorage");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
