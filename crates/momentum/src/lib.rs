//! Momentum — Daily Motivation Core
//!
//! Quote acquisition (remote providers with a deterministic offline
//! fallback), persisted favorites, and export helpers.
//!
//! ## Quick start
//!
//! ```no_run
//! use momentum::providers::QuotableProvider;
//! use momentum::resolver::QuoteResolver;
//!
//! let resolver = QuoteResolver::new(Box::new(QuotableProvider::new().unwrap()));
//! let resolved = resolver.fetch_quote();
//! println!("{}", resolved.quote());
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod fallback;
pub mod network;
pub mod providers;
pub mod resolver;
