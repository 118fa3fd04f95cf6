//! Quote source resolution
//!
//! Produces one quote on demand: a single remote attempt, then a uniform
//! pick from the built-in list. Provenance is carried in the result variant
//! so callers can tell a live quote from an offline one without inspecting
//! errors.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::data::types::Quote;
use crate::fallback;
use crate::providers::QuoteProvider;

/// A resolved quote, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedQuote {
    /// Fetched from the remote provider
    Remote(Quote),
    /// Drawn from the built-in offline list after a remote failure
    Fallback(Quote),
}

impl ResolvedQuote {
    /// The quote, regardless of provenance
    pub fn quote(&self) -> &Quote {
        match self {
            ResolvedQuote::Remote(q) | ResolvedQuote::Fallback(q) => q,
        }
    }

    /// Consume, regardless of provenance
    pub fn into_quote(self) -> Quote {
        match self {
            ResolvedQuote::Remote(q) | ResolvedQuote::Fallback(q) => q,
        }
    }

    /// Whether this quote came from the offline fallback list
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedQuote::Fallback(_))
    }
}

/// Resolves quotes from a provider with offline fallback
///
/// Stateless per call: one remote attempt, no retries, no backoff. The
/// resolver does not serialize overlapping calls — a caller that can issue
/// concurrent fetches should pair each with a `RequestTracker` ticket and
/// drop superseded results.
pub struct QuoteResolver {
    provider: Box<dyn QuoteProvider>,
}

impl QuoteResolver {
    /// Create a resolver backed by the given provider
    pub fn new(provider: Box<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Display name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Fetch one quote, falling back to the built-in list on any failure
    ///
    /// Never fails: network errors, bad statuses, and malformed payloads all
    /// collapse into `Fallback`.
    pub fn fetch_quote(&self) -> ResolvedQuote {
        match self.provider.random_quote() {
            Ok(quote) => ResolvedQuote::Remote(quote),
            Err(_) => ResolvedQuote::Fallback(fallback::random_fallback()),
        }
    }

    /// Skip the remote attempt entirely (offline mode)
    pub fn fetch_offline(&self) -> ResolvedQuote {
        ResolvedQuote::Fallback(fallback::random_fallback())
    }
}

// =============================================================================
// RequestTracker — last-request-wins
// =============================================================================

/// Monotonically increasing request ids with last-request-wins acceptance
///
/// The caller begins a ticket before each fetch and checks it when the
/// result arrives; a result whose ticket has been superseded by a newer
/// `begin` is stale and should be dropped rather than overwrite the current
/// quote.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    /// Create a tracker with no outstanding requests
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a result for `ticket` is still the most recent request
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
