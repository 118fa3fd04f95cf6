//! Session state management
//!
//! Persists the most recently fetched quote so successive commands can
//! operate on "the current quote" the way the widget did between button
//! presses. `None` is the "no quote generated yet" state.

use crate::data::storage;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session state file name
const SESSION_FILE: &str = "session.json";

/// Session file format version for migrations
const SESSION_VERSION: u32 = 1;

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// The most recently fetched quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<Quote>,
}

fn default_version() -> u32 {
    SESSION_VERSION
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            current: None,
        }
    }
}

impl SessionState {
    /// Load session state from the default storage location
    ///
    /// Missing or corrupt state starts a fresh session.
    pub fn load() -> Self {
        storage::load::<SessionState>(SESSION_FILE)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Load session state from a specific path
    pub fn load_from(path: &Path) -> Self {
        storage::load_from::<SessionState>(path)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Save session state to the default storage location
    pub fn save(&self) -> Result<()> {
        storage::save(SESSION_FILE, self)
    }

    /// Save session state to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Set the current quote
    pub fn set_current(&mut self, quote: Quote) {
        self.current = Some(quote);
    }

    /// The current quote, or the placeholder error if none was fetched yet
    pub fn current_quote(&self) -> Result<&Quote> {
        self.current.as_ref().ok_or(QuoteError::NoQuote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("momentum_session_test_{}.json", id))
    }

    #[test]
    fn test_default_has_no_current_quote() {
        let state = SessionState::default();
        assert!(matches!(state.current_quote(), Err(QuoteError::NoQuote)));
    }

    #[test]
    fn test_roundtrip() {
        let path = temp_path();

        let mut state = SessionState::default();
        state.set_current(Quote::new("Persist me", "Tester"));
        state.save_to(&path).unwrap();

        let loaded = SessionState::load_from(&path);
        assert_eq!(loaded.current_quote().unwrap().content, "Persist me");
        assert_eq!(loaded.current_quote().unwrap().author, "Tester");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_fresh_session() {
        let state = SessionState::load_from(&temp_path());
        assert!(state.current.is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_fresh_session() {
        let path = temp_path();
        fs::write(&path, "garbage").unwrap();

        let state = SessionState::load_from(&path);
        assert!(state.current.is_none());

        let _ = fs::remove_file(&path);
    }
}
