//! # Authentication
//!
//! Username/password authentication against the backend's bearer-token API.
//!
//! - [`validation`]: client-side form checks, run before any request is sent.
//! - [`session`]: [`AuthSession`]: register, login, logout and mount-time restore,
//!   keeping the [`TokenStore`](store::TokenStore) and the in-memory [`AuthState`]
//!   in step.

pub mod session;
pub mod validation;

pub use session::{AuthBackend, AuthSession, AuthState};
pub use validation::{validate_login, validate_registration, MIN_PASSWORD_LEN};
