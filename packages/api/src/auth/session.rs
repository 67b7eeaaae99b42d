//! Auth session: the bearer token in a [`TokenStore`] plus the user it resolves to.

use std::future::Future;

use store::TokenStore;

use super::validation::{validate_login, validate_registration};
use crate::client::ApiClient;
use crate::error::RequestError;
use crate::models::{AuthResponse, UserInfo};

/// The three auth endpoints.
pub trait AuthBackend {
    fn register(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, RequestError>>;
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, RequestError>>;
    fn me(&self) -> impl Future<Output = Result<Option<UserInfo>, RequestError>>;
}

impl<S: TokenStore> AuthBackend for ApiClient<S> {
    async fn register(&self, username: &str, password: &str) -> Result<AuthResponse, RequestError> {
        ApiClient::register(self, username, password).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, RequestError> {
        ApiClient::login(self, username, password).await
    }

    async fn me(&self) -> Result<Option<UserInfo>, RequestError> {
        ApiClient::me(self).await
    }
}

/// Authentication state held by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the mount-time session check has finished.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Apply the mount-time check unless a login or logout already settled the state.
    pub fn settle(&mut self, restored: AuthState) {
        if self.loading {
            *self = restored;
        }
    }
}

/// Drives register/login/logout/restore against a backend and a token store.
///
/// `tokens` must be the same store the backend reads its bearer token from.
#[derive(Clone, Debug)]
pub struct AuthSession<B, S> {
    backend: B,
    tokens: S,
}

impl<B: AuthBackend, S: TokenStore> AuthSession<B, S> {
    pub fn new(backend: B, tokens: S) -> Self {
        Self { backend, tokens }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate the form, register, and store the returned token.
    pub async fn register(&self, username: &str, password: &str, confirm: &str) -> Result<UserInfo, RequestError> {
        validate_registration(username, password, confirm)?;
        let response = self.backend.register(username.trim(), password).await?;
        tracing::info!("Registered user {}", response.username);
        Ok(self.accept(response))
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo, RequestError> {
        validate_login(username, password)?;
        let response = self.backend.login(username.trim(), password).await?;
        tracing::info!("Signed in as {}", response.username);
        Ok(self.accept(response))
    }

    fn accept(&self, response: AuthResponse) -> UserInfo {
        self.tokens.set(&response.token);
        response.user()
    }

    /// Clear the token and the user. Local only, safe to repeat.
    pub fn logout(&self, state: &mut AuthState) {
        self.tokens.clear();
        *state = AuthState::signed_out();
    }

    /// Resolve a stored token on mount.
    ///
    /// A token the backend rejects is removed, unless a login replaced it while
    /// the check was in flight. Transport failures leave the token in place and
    /// the user signed out for this page load.
    pub async fn restore(&self) -> AuthState {
        let sent = self.tokens.get();
        match self.backend.me().await {
            Ok(Some(user)) => {
                tracing::debug!("Restored session for {}", user.username);
                AuthState::signed_in(user)
            }
            Ok(None) => {
                if sent.is_some() && self.tokens.get() == sent {
                    tracing::info!("Stored token rejected, clearing it");
                    self.tokens.clear();
                }
                AuthState::signed_out()
            }
            Err(e) => {
                tracing::warn!("Session check failed: {}", e);
                AuthState::signed_out()
            }
        }
    }
}
