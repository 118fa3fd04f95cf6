//! ZenQuotes API provider
//!
//! Implementation of `QuoteProvider` for ZenQuotes
//! (<https://zenquotes.io/>), which returns a one-element `[{q, a}]` array.

use crate::config::providers::ZENQUOTES_DEFAULT_SERVER;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use crate::network::HttpClient;

use super::traits::QuoteProvider;

use serde::Deserialize;

/// One entry of the ZenQuotes `/api/random` array
#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    #[serde(default)]
    a: String,
}

impl From<ZenQuote> for Quote {
    fn from(z: ZenQuote) -> Self {
        if z.a.trim().is_empty() {
            Quote::anonymous(z.q)
        } else {
            Quote::new(z.q, z.a)
        }
    }
}

/// ZenQuotes API provider
pub struct ZenQuotesProvider {
    client: HttpClient,
    base_url: String,
}

impl ZenQuotesProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: ZENQUOTES_DEFAULT_SERVER.to_string(),
        })
    }

    /// Create a provider with a custom base URL (testing, or the dev-server
    /// proxy that fronts the API to sidestep cross-origin restrictions)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }
}

impl QuoteProvider for ZenQuotesProvider {
    fn name(&self) -> &'static str {
        "ZenQuotes"
    }

    fn id(&self) -> &'static str {
        "zenquotes"
    }

    fn random_quote(&self) -> Result<Quote> {
        let url = format!("{}/api/random", self.base_url);
        let raw: Vec<ZenQuote> = self.client.get_json(&url)?;

        let first = raw.into_iter().next().ok_or_else(|| {
            QuoteError::Provider(format!("{} returned an empty array", self.name()))
        })?;

        if first.q.trim().is_empty() {
            return Err(QuoteError::Provider(format!(
                "{} returned a quote with empty content",
                self.name()
            )));
        }
        Ok(first.into())
    }
}
