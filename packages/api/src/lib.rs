//! # API crate: HTTP client for the Notice backend
//!
//! Everything the front end sends over the network goes through this crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer-token aware `reqwest` wrapper, one method per endpoint |
//! | [`auth`] | Form validation and the [`AuthSession`] (register, login, logout, restore) |
//! | [`error`] | [`RequestError`] and the error-body message extraction |
//! | [`models`] | Wire types for auth, ranked search, knowledge graph, URL submission and status |
//!
//! The instant-answer result model and its decoding live in the `store` crate; this
//! crate re-exports the pieces callers need alongside the client.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use auth::{AuthBackend, AuthSession, AuthState};
pub use client::ApiClient;
pub use error::RequestError;
pub use models::{
    AuthResponse, CrawlerStatus, HealthResponse, IndexUrlResponse, InstantAnswer, KgContext,
    KnowledgeGraph, SearchHit, SearchOptions, SearchResponse, SubmitStatus, SubmitUrlResponse,
    UserInfo,
};

pub use store::{ClientConfig, Dispatch, SearchResult, SummaryUpdate, Website};
