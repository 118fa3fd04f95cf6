//! Common data types for persistence
//!
//! Shared types used across the data module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Attribution used when a source omits the author
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Content shown before the first quote has been fetched
const PLACEHOLDER_CONTENT: &str = "Click 'New Quote' to start!";

// =============================================================================
// Quote
// =============================================================================

/// One motivational sentence and its attribution
///
/// Identity for deduplication is `content` alone — two quotes with the same
/// text but different attributions are considered the same quote. This is an
/// inherited, documented behavior, not an accident of implementation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// The quote text
    pub content: String,
    /// Attribution ("Unknown" when the source doesn't provide one)
    #[serde(default = "default_author")]
    pub author: String,
}

fn default_author() -> String {
    UNKNOWN_AUTHOR.to_string()
}

impl Quote {
    /// Create a new quote
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }

    /// Create a quote with no known attribution
    pub fn anonymous(content: impl Into<String>) -> Self {
        Self::new(content, UNKNOWN_AUTHOR)
    }

    /// The sentinel shown before any quote has been generated
    ///
    /// Favoriting, copying, or sharing the placeholder is rejected.
    pub fn placeholder() -> Self {
        Self::anonymous(PLACEHOLDER_CONTENT)
    }

    /// Whether this is the "not yet generated" sentinel
    pub fn is_placeholder(&self) -> bool {
        self.content == PLACEHOLDER_CONTENT
    }

    /// The deduplication key — content only, author deliberately excluded
    pub fn content_key(&self) -> &str {
        &self.content
    }

    /// Formatted for clipboard and share text: `"<content>" - <author>`
    pub fn formatted(&self) -> String {
        format!("\"{}\" - {}", self.content, self.author)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{201c}{}\u{201d} — {}", self.content, self.author)
    }
}

// =============================================================================
// Favorite — a saved quote with user-specific data
// =============================================================================

/// A favorited quote
///
/// Extends Quote with the time it was saved. The quote fields are flattened
/// so the persisted JSON round-trips `{content, author}` pairs directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    /// The quote data
    #[serde(flatten)]
    pub quote: Quote,

    /// When the favorite was added (Unix timestamp)
    #[serde(default)]
    pub added_at: u64,
}

impl Favorite {
    /// Create a new favorite from a quote
    pub fn from_quote(quote: Quote) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            quote,
            added_at: now,
        }
    }

    /// Create a new favorite with minimal info
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self::from_quote(Quote::new(content, author))
    }

    /// The deduplication key (content only)
    pub fn content_key(&self) -> &str {
        self.quote.content_key()
    }

    /// Get the quote text
    pub fn content(&self) -> &str {
        &self.quote.content
    }

    /// Get the attribution
    pub fn author(&self) -> &str {
        &self.quote.author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_creation() {
        let quote = Quote::new("Stay hungry.", "Steve Jobs");
        assert_eq!(quote.content, "Stay hungry.");
        assert_eq!(quote.author, "Steve Jobs");
        assert!(!quote.is_placeholder());
    }

    #[test]
    fn test_quote_anonymous() {
        let quote = Quote::anonymous("No attribution here");
        assert_eq!(quote.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_placeholder_detected() {
        assert!(Quote::placeholder().is_placeholder());
        assert!(!Quote::new("real", "someone").is_placeholder());
    }

    #[test]
    fn test_content_key_ignores_author() {
        let a = Quote::new("Same text", "Author A");
        let b = Quote::new("Same text", "Author B");
        assert_eq!(a.content_key(), b.content_key());
    }

    #[test]
    fn test_formatted() {
        let quote = Quote::new("Do it", "Someone");
        assert_eq!(quote.formatted(), "\"Do it\" - Someone");
    }

    #[test]
    fn test_display() {
        let quote = Quote::new("Do it", "Someone");
        let shown = format!("{quote}");
        assert!(shown.contains("Do it"));
        assert!(shown.contains("Someone"));
    }

    #[test]
    fn test_quote_deserialize_missing_author_defaults() {
        let quote: Quote = serde_json::from_str(r#"{"content": "Text only"}"#).unwrap();
        assert_eq!(quote.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_quote_roundtrip() {
        let quote = Quote::new("Roundtrip", "Tester");
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }

    #[test]
    fn test_favorite_from_quote() {
        let fav = Favorite::from_quote(Quote::new("Saved", "Author"));
        assert_eq!(fav.content(), "Saved");
        assert_eq!(fav.author(), "Author");
        assert!(fav.added_at > 0);
    }

    #[test]
    fn test_favorite_serializes_flattened() {
        let fav = Favorite::new("Flat", "Author");
        let json = serde_json::to_string(&fav).unwrap();
        // Quote fields sit at the top level of the favorite object
        assert!(json.contains("\"content\":\"Flat\""));
        assert!(json.contains("\"author\":\"Author\""));
    }

    #[test]
    fn test_favorite_deserialize_without_added_at() {
        let fav: Favorite =
            serde_json::from_str(r#"{"content": "Old data", "author": "X"}"#).unwrap();
        assert_eq!(fav.added_at, 0);
        assert_eq!(fav.content(), "Old data");
    }
}
