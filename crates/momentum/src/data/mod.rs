//! Data persistence
//!
//! Handles favorites, session state, and storage plumbing.

pub mod backend;
pub mod favorites;
pub mod session;
pub mod storage;
pub mod types;

// Re-export common types
pub use backend::{FavoritesBackend, JsonFileBackend, MemoryBackend};
pub use favorites::{FavoritesStore, ToggleOutcome};
pub use session::SessionState;
pub use storage::{config_dir, data_path, load, save};
pub use types::{Favorite, Quote, UNKNOWN_AUTHOR};
