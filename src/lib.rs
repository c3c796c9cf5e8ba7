// ABOUTME: Main library entry point for the FoodLens API client
// ABOUTME: Provides session management, local credential storage, and the typed REST gateway

#![deny(unsafe_code)]

//! # FoodLens Client
//!
//! A client library for the FoodLens nutrition-analysis backend. It bundles
//! the three pieces a frontend needs to talk to the service:
//!
//! - **Session store**: durable login state and bearer token, surviving
//!   process restarts via an on-disk preferences file
//! - **User record store**: sqlite-backed local credential bookkeeping used
//!   as a legacy fallback to the remote login
//! - **API gateway**: typed wrappers over the fixed set of remote REST
//!   operations (login, registration, category browsing, product and image
//!   analysis, profile CRUD, recommendations) with automatic bearer-token
//!   attachment and a cross-cutting forced-logout policy on `401` responses
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use foodlens_client::{ApiGateway, ClientConfig, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let session = Arc::new(SessionStore::new(&config.data_dir)?);
//!     let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
//!
//!     let response = gateway.login("9990001111", "secret").await?;
//!     println!("{}", response.message.unwrap_or_default());
//!     Ok(())
//! }
//! ```

/// Environment-driven client configuration
pub mod config;

/// Central constants for routes, preference keys, and defaults
pub mod constants;

/// Local sqlite persistence for user records
pub mod database;

/// Unified client error types
pub mod errors;

/// Remote API gateway with bearer-token attachment
pub mod gateway;

/// Language preference handling for bilingual responses
pub mod locale;

/// Logging configuration helpers
pub mod logging;

/// Wire data models and the local user record entity
pub mod models;

/// Durable session state and token storage
pub mod session;

pub use config::ClientConfig;
pub use database::Database;
pub use errors::{ClientError, ClientResult};
pub use gateway::ApiGateway;
pub use locale::Language;
pub use session::SessionStore;
