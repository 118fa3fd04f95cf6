//! Favorites storage backends
//!
//! The store is constructor-injected with a backend so tests can substitute
//! an in-memory fake for the JSON file.

use crate::data::storage;
use crate::data::types::Favorite;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;

/// Favorites data file name
const FAVORITES_FILE: &str = "favorites.json";

/// Favorites file format version for migrations
const FAVORITES_VERSION: u32 = 1;

/// Favorites file structure
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    favorites: Vec<Favorite>,
}

impl Default for FavoritesFile {
    fn default() -> Self {
        Self {
            version: FAVORITES_VERSION,
            favorites: Vec::new(),
        }
    }
}

/// Durable storage for the favorites collection
///
/// `load` returns the last saved collection; `save` replaces it wholesale.
/// The store writes through on every mutation.
pub trait FavoritesBackend {
    /// Load the persisted collection. Missing storage yields an empty vec.
    fn load(&self) -> Result<Vec<Favorite>>;

    /// Persist the full collection, replacing any previous state.
    fn save(&self, favorites: &[Favorite]) -> Result<()>;
}

// =============================================================================
// JsonFileBackend
// =============================================================================

/// JSON file backend using the application config directory
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend at the default storage location
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: storage::data_path(FAVORITES_FILE)?,
        })
    }

    /// Create a backend at a specific path (for testing or custom locations)
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this backend reads and writes
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl FavoritesBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Favorite>> {
        // TODO: Handle version migrations when FAVORITES_VERSION increases
        match storage::load_from::<FavoritesFile>(&self.path)? {
            Some(file) => Ok(file.favorites),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, favorites: &[Favorite]) -> Result<()> {
        let file = FavoritesFile {
            version: FAVORITES_VERSION,
            favorites: favorites.to_vec(),
        };
        storage::save_to(&self.path, &file)
    }
}

// =============================================================================
// MemoryBackend
// =============================================================================

/// In-memory backend (tests, ephemeral sessions)
#[derive(Default)]
pub struct MemoryBackend {
    favorites: RefCell<Vec<Favorite>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with favorites
    pub fn with_favorites(favorites: Vec<Favorite>) -> Self {
        Self {
            favorites: RefCell::new(favorites),
        }
    }
}

impl FavoritesBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<Favorite>> {
        Ok(self.favorites.borrow().clone())
    }

    fn save(&self, favorites: &[Favorite]) -> Result<()> {
        *self.favorites.borrow_mut() = favorites.to_vec();
        Ok(())
    }
}
