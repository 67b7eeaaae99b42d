use std::sync::{Arc, Mutex};

use crate::token::{non_blank, TokenStore};

/// In-memory TokenStore for testing and builds without persistence.
///
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        let token = self.token.lock().ok()?.clone();
        non_blank(token)
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared");
        assert_eq!(other.get().as_deref(), Some("shared"));
        other.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_blank_token_reads_as_absent() {
        let store = MemoryStore::with_token("   ");
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryStore::with_token("t");
        store.clear();
        store.clear();
        assert!(store.get().is_none());
    }
}
