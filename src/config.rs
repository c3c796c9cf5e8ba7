// ABOUTME: Environment-driven configuration for the FoodLens client
// ABOUTME: Handles base URL, timeouts, data directory, database URL, and default language

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{defaults, env as env_keys};
use crate::locale::Language;

/// Client configuration, loaded from environment variables with defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// FoodLens backend base URL
    pub base_url: String,

    /// Sqlite database URL for the local user record store
    pub database_url: String,

    /// Directory holding durable client state (preferences file)
    pub data_dir: PathBuf,

    /// Overall request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Default display language
    pub language: Language,
}

impl ClientConfig {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var(env_keys::DATA_DIR)
            .map_or_else(|_| default_data_dir(), PathBuf::from);

        let config = Self {
            base_url: std::env::var(env_keys::API_BASE_URL)
                .unwrap_or_else(|_| defaults::API_BASE_URL.to_owned()),

            database_url: std::env::var(env_keys::DATABASE_URL)
                .unwrap_or_else(|_| default_database_url(&data_dir)),

            timeout_secs: std::env::var(env_keys::HTTP_TIMEOUT_SECS)
                .unwrap_or_else(|_| defaults::HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .context("FOODLENS_HTTP_TIMEOUT_SECS must be a valid number")?,

            connect_timeout_secs: std::env::var(env_keys::CONNECT_TIMEOUT_SECS)
                .unwrap_or_else(|_| defaults::CONNECT_TIMEOUT_SECS.to_string())
                .parse()
                .context("FOODLENS_CONNECT_TIMEOUT_SECS must be a valid number")?,

            language: std::env::var(env_keys::LANGUAGE)
                .unwrap_or_else(|_| Language::default().to_string())
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("FOODLENS_LANGUAGE must be English or Hindi")?,

            data_dir,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base URL must start with http:// or https://");
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("request timeout must be greater than 0");
        }

        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connection timeout must be greater than 0");
        }

        Ok(())
    }

    /// Overall request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            base_url: defaults::API_BASE_URL.to_owned(),
            database_url: default_database_url(&data_dir),
            data_dir,
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
            language: Language::default(),
        }
    }
}

/// Platform data directory for client state, with a local fallback
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map_or_else(|| PathBuf::from(".foodlens"), |dir| dir.join("foodlens"))
}

/// Sqlite URL pointing at the default database file in the data directory
fn default_database_url(data_dir: &std::path::Path) -> String {
    format!("sqlite:{}", data_dir.join(defaults::DATABASE_FILE).display())
}
