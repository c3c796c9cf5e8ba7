// ABOUTME: Durable session state holder for login flag, bearer token, and preferences
// ABOUTME: Single source of truth for authentication state, surviving process restarts

//! # Session Store
//!
//! Tracks whether a user is logged in and holds the bearer token issued by
//! the remote backend. State is persisted to a JSON preferences file in
//! the client data directory so a restarted process resumes its session.
//!
//! The store keeps a transient in-memory copy of the token for request
//! signing, refreshed lazily from disk when absent. Updates are
//! last-write-wins and reads tolerate staleness of at most one session;
//! there are only two states, logged out and logged in. The transition to
//! logged in happens only on confirmed remote login success, the
//! transition back only on explicit logout or a forced logout after a
//! `401` response.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

use crate::constants::prefs;
use crate::errors::{ClientError, ClientResult};
use crate::locale::Language;

/// Durable preference payload written to disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Preferences {
    /// Whether a user is currently authenticated
    #[serde(default)]
    is_logged_in: bool,
    /// Bearer token from the remote login response
    #[serde(default)]
    auth_token: Option<String>,
    /// Mobile number used at login
    #[serde(default)]
    logged_in_user: Option<String>,
    /// Display language name, e.g. "English"
    #[serde(default)]
    language: Option<String>,
    /// Locale code matching `language`, e.g. "en"
    #[serde(default)]
    language_code: Option<String>,
}

/// Session state holder backed by an on-disk preferences file
pub struct SessionStore {
    prefs_path: PathBuf,
    /// In-memory token copy for request signing; lazily recovered from disk
    token: RwLock<Option<String>>,
}

impl SessionStore {
    /// Open (or initialize) the session store under the given data directory
    pub fn new(data_dir: &Path) -> ClientResult<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            prefs_path: data_dir.join(prefs::PREFERENCES_FILE),
            token: RwLock::new(None),
        })
    }

    /// Update the in-memory token; `None` clears it
    ///
    /// Does not touch durable storage; use
    /// [`SessionStore::persist_login_success`] for that.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    /// Durably record a successful login
    ///
    /// Writes the token, the mobile identifier, and `is_logged_in = true`;
    /// subsequent launches skip the unauthenticated entry screen.
    pub fn persist_login_success(&self, token: &str, mobile: &str) -> ClientResult<()> {
        let mut preferences = self.load();
        preferences.is_logged_in = true;
        preferences.auth_token = Some(token.to_owned());
        preferences.logged_in_user = Some(mobile.to_owned());
        self.save(&preferences)?;

        self.set_token(Some(token.to_owned()));
        debug!(user = %mobile, "session persisted after login");
        Ok(())
    }

    /// Clear the session: login flag, durable token, and in-memory copy
    ///
    /// The next navigation must return to the unauthenticated entry point.
    /// Idempotent; language preferences are preserved.
    pub fn logout(&self) -> ClientResult<()> {
        let mut preferences = self.load();
        preferences.is_logged_in = false;
        preferences.auth_token = None;
        preferences.logged_in_user = None;
        self.save(&preferences)?;

        self.set_token(None);
        debug!("session cleared");
        Ok(())
    }

    /// Current bearer token, if any
    ///
    /// Returns the in-memory token when set, otherwise reads the durable
    /// token and caches it (process-restart recovery).
    pub fn current_token(&self) -> Option<String> {
        if let Ok(guard) = self.token.read() {
            if let Some(token) = guard.as_ref() {
                return Some(token.clone());
            }
        }

        let recovered = self.load().auth_token;
        if recovered.is_some() {
            self.set_token(recovered.clone());
        }
        recovered
    }

    /// Whether a user is currently logged in, per durable storage
    ///
    /// Read at application start to choose the initial screen.
    pub fn is_logged_in(&self) -> bool {
        self.load().is_logged_in
    }

    /// Mobile identifier recorded at login, if any
    pub fn logged_in_user(&self) -> Option<String> {
        self.load().logged_in_user
    }

    /// Persisted display language, defaulting to English
    pub fn language(&self) -> Language {
        self.load()
            .language
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    /// Persist the display language and its locale code
    pub fn set_language(&self, language: Language) -> ClientResult<()> {
        let mut preferences = self.load();
        preferences.language = Some(language.as_str().to_owned());
        preferences.language_code = Some(language.code().to_owned());
        self.save(&preferences)
    }

    /// Read preferences from disk; a missing or unreadable file reads as
    /// the logged-out default
    fn load(&self) -> Preferences {
        match fs::read_to_string(&self.prefs_path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %self.prefs_path.display(), error = %e, "malformed preferences file, treating as logged out");
                Preferences::default()
            }),
            Err(_) => Preferences::default(),
        }
    }

    /// Write preferences to disk
    fn save(&self, preferences: &Preferences) -> ClientResult<()> {
        let contents = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.prefs_path, contents)
            .map_err(|e| ClientError::storage(format!("failed to write preferences: {e}")))
    }
}
