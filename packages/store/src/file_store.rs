//! # Filesystem-backed token store
//!
//! [`FileStore`] keeps the bearer token in a single file so native builds stay
//! signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <token_key>          # the raw token string
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/notice/` |
//! | Linux | `~/.local/share/notice/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\notice\` |

use std::path::PathBuf;

use crate::token::{non_blank, TokenStore, DEFAULT_TOKEN_KEY};

/// Filesystem-backed TokenStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self::with_key(base, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(base: PathBuf, key: &str) -> Self {
        Self {
            base,
            key: key.to_string(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStore for FileStore {
    fn get(&self) -> Option<String> {
        non_blank(std::fs::read_to_string(self.token_path()).ok())
    }

    fn set(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("failed to create token directory: {}", e);
            return;
        }
        if let Err(e) = std::fs::write(self.token_path(), token) {
            tracing::warn!("failed to persist token: {}", e);
        }
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}
