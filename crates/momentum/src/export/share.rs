//! Share-link export
//!
//! Builds a pre-filled messaging deep link for the current quote and
//! optionally opens it with the system handler.

use crate::config::export::SHARE_BASE_URL;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};

/// The message text placed in the share link
pub fn share_text(quote: &Quote) -> String {
    format!("Daily Motivation: {}", quote.formatted())
}

/// Build the share deep link for a quote
///
/// Rejects the placeholder sentinel.
pub fn share_link(quote: &Quote) -> Result<String> {
    if quote.is_placeholder() || quote.content.is_empty() {
        return Err(QuoteError::NoQuote);
    }
    let text = share_text(quote);
    Ok(format!("{}{}", SHARE_BASE_URL, urlencoding::encode(&text)))
}

/// Build the share link and open it in a new context
///
/// Returns the link so the caller can also print it.
pub fn open_share_link(quote: &Quote) -> Result<String> {
    let link = share_link(quote)?;
    open::that(&link)
        .map_err(|e| QuoteError::Export(format!("Could not open share link: {}", e)))?;
    Ok(link)
}
