//! Favorites management
//!
//! Ordered, content-deduplicated collection of saved quotes with
//! write-through persistence.

use crate::data::backend::FavoritesBackend;
use crate::data::types::{Favorite, Quote};
use crate::error::{QuoteError, Result};

/// Outcome of a toggle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The quote was not favorited and has been added
    Added,
    /// The quote was favorited and has been removed
    Removed,
}

/// Manages the favorites collection and its persistence
///
/// Entries keep insertion order and are deduplicated by quote content —
/// author is deliberately not part of the key (see `Quote::content_key`).
/// Every mutation is written through to the backend before it is considered
/// complete; on a failed save the in-memory state is rolled back so memory
/// and storage never diverge.
pub struct FavoritesStore<B: FavoritesBackend> {
    backend: B,
    favorites: Vec<Favorite>,
}

impl<B: FavoritesBackend> FavoritesStore<B> {
    /// Load the collection from the backend
    ///
    /// Missing or corrupt persisted state initializes an empty collection —
    /// a broken favorites file must never take the application down.
    pub fn load(backend: B) -> Self {
        let favorites = backend.load().unwrap_or_default();
        Self { backend, favorites }
    }

    /// Create an empty store without reading the backend
    pub fn empty(backend: B) -> Self {
        Self {
            backend,
            favorites: Vec::new(),
        }
    }

    /// Check if a quote is favorited (matched by content only)
    pub fn is_favorite(&self, quote: &Quote) -> bool {
        self.contains_content(quote.content_key())
    }

    /// Check if any entry has the given content
    pub fn contains_content(&self, content_key: &str) -> bool {
        self.favorites.iter().any(|f| f.content_key() == content_key)
    }

    /// Add a quote to the favorites
    ///
    /// No-op (returns `Ok(false)`) for duplicates, empty content, and the
    /// placeholder sentinel. Returns `Ok(true)` when the quote was appended
    /// and persisted.
    pub fn add(&mut self, quote: Quote) -> Result<bool> {
        if quote.content.is_empty() || quote.is_placeholder() || self.is_favorite(&quote) {
            return Ok(false);
        }

        self.favorites.push(Favorite::from_quote(quote));
        if let Err(e) = self.save() {
            self.favorites.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Remove all entries whose content equals `content_key`
    ///
    /// Returns `Ok(true)` if anything was removed. A miss is a no-op and
    /// does not touch storage.
    pub fn remove(&mut self, content_key: &str) -> Result<bool> {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.content_key() != content_key);

        if self.favorites.len() == before {
            return Ok(false);
        }
        if let Err(e) = self.save() {
            // Rollback is impossible without the removed entries; reload
            // from the backend which still holds the pre-remove state.
            self.favorites = self.backend.load().unwrap_or_default();
            return Err(e);
        }
        Ok(true)
    }

    /// Toggle favorite status for a quote
    ///
    /// Removes it if present (matched by content), adds it otherwise.
    /// Rejects the "not yet generated" placeholder.
    pub fn toggle(&mut self, quote: Quote) -> Result<ToggleOutcome> {
        if quote.is_placeholder() || quote.content.is_empty() {
            return Err(QuoteError::NoQuote);
        }

        if self.is_favorite(&quote) {
            self.remove(quote.content_key())?;
            Ok(ToggleOutcome::Removed)
        } else {
            self.add(quote)?;
            Ok(ToggleOutcome::Added)
        }
    }

    /// All favorites in insertion order
    pub fn all(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Number of favorites
    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Write the full collection through to the backend
    fn save(&self) -> Result<()> {
        self.backend.save(&self.favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::backend::{JsonFileBackend, MemoryBackend};
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("momentum_fav_test_{}.json", id))
    }

    fn empty_store() -> FavoritesStore<MemoryBackend> {
        FavoritesStore::empty(MemoryBackend::new())
    }

    #[test]
    fn test_add_then_is_favorite() {
        let mut store = empty_store();
        let quote = Quote::new("Begin anywhere.", "John Cage");

        assert!(store.add(quote.clone()).unwrap());
        assert!(store.is_favorite(&quote));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = empty_store();
        let quote = Quote::new("Once is enough", "A");

        assert!(store.add(quote.clone()).unwrap());
        assert!(!store.add(quote.clone()).unwrap());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_add_rejects_empty_content() {
        let mut store = empty_store();
        assert!(!store.add(Quote::new("", "Nobody")).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_placeholder() {
        let mut store = empty_store();
        assert!(!store.add(Quote::placeholder()).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_clears_favorite() {
        let mut store = empty_store();
        let quote = Quote::new("Removable", "B");
        store.add(quote.clone()).unwrap();

        assert!(store.remove(quote.content_key()).unwrap());
        assert!(!store.is_favorite(&quote));
    }

    #[test]
    fn test_remove_miss_is_noop() {
        let mut store = empty_store();
        assert!(!store.remove("never added").unwrap());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = empty_store();
        let quote = Quote::new("There and back", "C");

        assert_eq!(store.toggle(quote.clone()).unwrap(), ToggleOutcome::Added);
        assert_eq!(store.toggle(quote.clone()).unwrap(), ToggleOutcome::Removed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_rejects_placeholder() {
        let mut store = empty_store();
        assert!(matches!(
            store.toggle(Quote::placeholder()),
            Err(QuoteError::NoQuote)
        ));
    }

    #[test]
    fn test_toggle_ignores_author() {
        // Dedup key is content only — a toggle with a different attribution
        // still removes the existing entry. Documented inherited behavior.
        let mut store = empty_store();
        store.add(Quote::new("A", "X")).unwrap();

        let outcome = store.toggle(Quote::new("A", "Y")).unwrap();
        assert_eq!(outcome, ToggleOutcome::Removed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = empty_store();
        store.add(Quote::new("first", "1")).unwrap();
        store.add(Quote::new("second", "2")).unwrap();
        store.add(Quote::new("third", "3")).unwrap();

        let contents: Vec<&str> = store.all().iter().map(|f| f.content()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let backend = MemoryBackend::new();
        let mut store = FavoritesStore::empty(backend);

        store.add(Quote::new("persisted", "D")).unwrap();
        assert_eq!(store.backend.load().unwrap().len(), 1);

        store.remove("persisted").unwrap();
        assert!(store.backend.load().unwrap().is_empty());
    }

    // =========================================================================
    // Persistence tests
    // =========================================================================

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path();

        {
            let mut store = FavoritesStore::load(JsonFileBackend::at_path(&path));
            store.add(Quote::new("Quote 1", "Author 1")).unwrap();
            store.add(Quote::new("Quote 2", "Author 2")).unwrap();
        }

        {
            let store = FavoritesStore::load(JsonFileBackend::at_path(&path));
            assert_eq!(store.count(), 2);
            assert_eq!(store.all()[0].content(), "Quote 1");
            assert_eq!(store.all()[0].author(), "Author 1");
            assert_eq!(store.all()[1].content(), "Quote 2");
            assert_eq!(store.all()[1].author(), "Author 2");
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_nonexistent_file_is_empty() {
        let store = FavoritesStore::load(JsonFileBackend::at_path(temp_path()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_recovers_to_empty() {
        let path = temp_path();
        fs::write(&path, "][ definitely not json").unwrap();

        let store = FavoritesStore::load(JsonFileBackend::at_path(&path));
        assert!(store.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_mutation_after_corrupt_load_overwrites() {
        let path = temp_path();
        fs::write(&path, "corrupt").unwrap();

        let mut store = FavoritesStore::load(JsonFileBackend::at_path(&path));
        store.add(Quote::new("fresh start", "E")).unwrap();

        let reloaded = FavoritesStore::load(JsonFileBackend::at_path(&path));
        assert_eq!(reloaded.count(), 1);

        let _ = fs::remove_file(&path);
    }
}
