//! Quote providers
//!
//! Remote sources for random quotes (Quotable, ZenQuotes).

pub mod quotable;
pub mod traits;
pub mod zenquotes;

// Re-exports
pub use quotable::QuotableProvider;
pub use traits::QuoteProvider;
pub use zenquotes::ZenQuotesProvider;

use crate::error::{QuoteError, Result};

/// Construct a provider by its machine-readable ID
pub fn by_id(id: &str, base_url: Option<&str>) -> Result<Box<dyn QuoteProvider>> {
    match id {
        "quotable" => Ok(match base_url {
            Some(url) => Box::new(QuotableProvider::with_base_url(url)?),
            None => Box::new(QuotableProvider::new()?),
        }),
        "zenquotes" => Ok(match base_url {
            Some(url) => Box::new(ZenQuotesProvider::with_base_url(url)?),
            None => Box::new(ZenQuotesProvider::new()?),
        }),
        other => Err(QuoteError::Provider(format!(
            "Unknown provider '{}' (expected 'quotable' or 'zenquotes')",
            other
        ))),
    }
}
