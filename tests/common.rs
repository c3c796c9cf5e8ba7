// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, session, and gateway creation helpers
#![allow(dead_code)]

//! Shared test utilities for `foodlens_client` integration tests.

use anyhow::Result;
use foodlens_client::{ApiGateway, ClientConfig, Database, SessionStore};
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Session store over a fresh temporary directory
///
/// The returned `TempDir` must stay alive for the store's lifetime.
pub fn create_test_session() -> Result<(TempDir, Arc<SessionStore>)> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let session = Arc::new(SessionStore::new(dir.path())?);
    Ok((dir, session))
}

/// Gateway pointed at the given base URL (typically a mock server)
pub fn create_test_gateway(base_url: &str, session: Arc<SessionStore>) -> Result<ApiGateway> {
    let config = ClientConfig {
        base_url: base_url.to_owned(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..ClientConfig::default()
    };
    Ok(ApiGateway::new(&config, session)?)
}
