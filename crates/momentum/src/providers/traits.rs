//! Quote provider trait
//!
//! Defines the interface that all remote quote sources must implement.

use crate::data::types::Quote;
use crate::error::Result;

/// A remote source of quotes
///
/// Implementations fetch one random quote per call. A provider returns an
/// error for anything it cannot turn into a well-formed quote — network
/// failure, non-success status, or a payload in the wrong shape — and the
/// resolver decides what to do about it.
pub trait QuoteProvider: Send + Sync {
    /// Display name for the provider (e.g., "Quotable")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "quotable")
    fn id(&self) -> &'static str;

    /// Fetch one random quote
    fn random_quote(&self) -> Result<Quote>;
}
