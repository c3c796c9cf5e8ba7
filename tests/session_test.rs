// ABOUTME: Integration tests for the durable session store
// ABOUTME: Covers login persistence across restarts, logout, and language preferences

mod common;

use anyhow::Result;
use common::create_test_session;
use foodlens_client::{Language, SessionStore};

#[test]
fn test_login_success_token_round_trip() -> Result<()> {
    let (_dir, session) = create_test_session()?;

    session.persist_login_success("tok123", "9990001111")?;
    assert_eq!(session.current_token().as_deref(), Some("tok123"));
    assert!(session.is_logged_in());
    assert_eq!(session.logged_in_user().as_deref(), Some("9990001111"));

    session.logout()?;
    assert!(session.current_token().is_none());
    assert!(!session.is_logged_in());
    assert!(session.logged_in_user().is_none());
    Ok(())
}

#[test]
fn test_token_survives_simulated_restart() -> Result<()> {
    let (dir, session) = create_test_session()?;
    session.persist_login_success("tok123", "9990001111")?;
    drop(session);

    // A fresh store over the same directory recovers the durable token
    let restarted = SessionStore::new(dir.path())?;
    assert!(restarted.is_logged_in());
    assert_eq!(restarted.current_token().as_deref(), Some("tok123"));
    assert_eq!(restarted.logged_in_user().as_deref(), Some("9990001111"));
    Ok(())
}

#[test]
fn test_logout_survives_simulated_restart() -> Result<()> {
    let (dir, session) = create_test_session()?;
    session.persist_login_success("tok123", "9990001111")?;
    session.logout()?;
    drop(session);

    let restarted = SessionStore::new(dir.path())?;
    assert!(!restarted.is_logged_in());
    assert!(restarted.current_token().is_none());
    Ok(())
}

#[test]
fn test_last_login_wins() -> Result<()> {
    let (_dir, session) = create_test_session()?;
    session.persist_login_success("tok123", "9990001111")?;
    session.persist_login_success("tok456", "8880002222")?;

    assert_eq!(session.current_token().as_deref(), Some("tok456"));
    assert_eq!(session.logged_in_user().as_deref(), Some("8880002222"));
    Ok(())
}

#[test]
fn test_language_persisted_with_code() -> Result<()> {
    let (dir, session) = create_test_session()?;
    assert_eq!(session.language(), Language::English);

    session.set_language(Language::Hindi)?;

    // Durable payload carries both the display name and the locale code
    let contents = std::fs::read_to_string(dir.path().join("preferences.json"))?;
    assert!(contents.contains("\"Hindi\""));
    assert!(contents.contains("\"hi\""));

    let restarted = SessionStore::new(dir.path())?;
    assert_eq!(restarted.language(), Language::Hindi);
    Ok(())
}
