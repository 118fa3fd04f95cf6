//! Networking utilities
//!
//! Shared HTTP client used by all quote providers.

pub mod client;

pub use client::HttpClient;
