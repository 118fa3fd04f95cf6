//! Quotable API provider
//!
//! Implementation of `QuoteProvider` for the Quotable API
//! (<https://api.quotable.io/>), which returns `{content, author}` objects.

use crate::config::providers::QUOTABLE_DEFAULT_SERVER;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use crate::network::HttpClient;

use super::traits::QuoteProvider;

use serde::Deserialize;

/// Quotable `/random` response shape
#[derive(Debug, Deserialize)]
struct QuotableQuote {
    content: String,
    #[serde(default)]
    author: String,
}

impl From<QuotableQuote> for Quote {
    fn from(q: QuotableQuote) -> Self {
        if q.author.trim().is_empty() {
            Quote::anonymous(q.content)
        } else {
            Quote::new(q.content, q.author)
        }
    }
}

/// Quotable API provider
pub struct QuotableProvider {
    client: HttpClient,
    base_url: String,
}

impl QuotableProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: QUOTABLE_DEFAULT_SERVER.to_string(),
        })
    }

    /// Create a provider with a custom base URL (testing, or a local proxy
    /// standing in front of the real API)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }
}

impl QuoteProvider for QuotableProvider {
    fn name(&self) -> &'static str {
        "Quotable"
    }

    fn id(&self) -> &'static str {
        "quotable"
    }

    fn random_quote(&self) -> Result<Quote> {
        let url = format!("{}/random", self.base_url);
        let raw: QuotableQuote = self.client.get_json(&url)?;

        if raw.content.trim().is_empty() {
            return Err(QuoteError::Provider(format!(
                "{} returned a quote with empty content",
                self.name()
            )));
        }
        Ok(raw.into())
    }
}
