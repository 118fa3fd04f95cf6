//! Clipboard export
//!
//! Writes the formatted quote to the system clipboard.

use crate::data::types::Quote;
use crate::error::{QuoteError, Result};

/// Copy `"<content>" - <author>` to the system clipboard
///
/// Rejects the placeholder sentinel; a clipboard failure is an `Export`
/// error for the caller to surface, not a crash.
pub fn copy_to_clipboard(quote: &Quote) -> Result<()> {
    if quote.is_placeholder() || quote.content.is_empty() {
        return Err(QuoteError::NoQuote);
    }

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| QuoteError::Export(format!("Clipboard unavailable: {}", e)))?;
    clipboard
        .set_text(quote.formatted())
        .map_err(|e| QuoteError::Export(format!("Copy failed: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_placeholder() {
        let result = copy_to_clipboard(&Quote::placeholder());
        assert!(matches!(result, Err(QuoteError::NoQuote)));
    }

    #[test]
    fn test_rejects_empty_content() {
        let result = copy_to_clipboard(&Quote::new("", "Nobody"));
        assert!(matches!(result, Err(QuoteError::NoQuote)));
    }

    #[test]
    fn test_clipboard_text_format() {
        // The exact string written to the clipboard
        let quote = Quote::new("Make it count", "Coach");
        assert_eq!(quote.formatted(), "\"Make it count\" - Coach");
    }

    // Requires a display server / clipboard daemon
    #[test]
    #[ignore]
    fn test_integration_copy() {
        let quote = Quote::new("Clipboard check", "Tester");
        copy_to_clipboard(&quote).unwrap();

        let mut clipboard = arboard::Clipboard::new().unwrap();
        assert_eq!(clipboard.get_text().unwrap(), quote.formatted());
    }
}
