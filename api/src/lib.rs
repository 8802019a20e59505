//! # API crate — REST client for the redirect service
//!
//! This crate is the single place the application talks to the backend from.
//! It wraps every endpoint of the redirect service behind [`ApiClient`], maps
//! transport and HTTP failures into one [`ApiError`] taxonomy, and defines the
//! wire models the views share.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: login, register, and the authenticated redirect CRUD calls |
//! | [`config`] | [`ApiConfig`]: the one configurable base URL every endpoint path joins onto |
//! | [`error`] | [`ApiError`]: network / missing-token / HTTP-status / decode failures, with server `detail` extraction |
//! | [`models`] | Wire models: [`RedirectMapping`], [`RedirectDraft`], response envelopes |
//!
//! ## Endpoint table
//!
//! | Method | Path | Auth | Body |
//! |--------|------|------|------|
//! | POST | `/login` | — | form-encoded `username`, `password` |
//! | POST | `/register` | — | JSON `{email, password}` |
//! | GET | `/redirects/` | bearer | — |
//! | POST | `/redirects/` | bearer | JSON `{shortcode, target_url}` |
//! | PUT | `/redirects/{id}` | bearer | JSON `{shortcode, target_url}` |
//! | DELETE | `/redirects/{id}` | bearer | — |
//!
//! The client compiles for both `wasm32` (browser fetch) and native targets;
//! the integration tests exercise it natively against a mock server.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{RedirectDraft, RedirectList, RedirectMapping, TokenResponse};
