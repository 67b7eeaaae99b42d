//! # User model
//!
//! [`AuthResponse`] is what `POST /api/auth/register` and `POST /api/auth/login`
//! return: the bearer token plus the user's identity. [`UserInfo`] is the part the
//! UI keeps in memory; it is also the body of `GET /api/auth/me`.

use serde::{Deserialize, Serialize};

/// The signed-in user as held by the auth context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub user_id: String,
    pub username: String,
}

impl UserInfo {
    /// Get display name, falling back to the id if the username is blank.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.user_id
        } else {
            &self.username
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    #[serde(default)]
    pub username: String,
}

impl AuthResponse {
    pub fn user(&self) -> UserInfo {
        UserInfo {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
        }
    }
}
