//! Error types for momentum
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for momentum
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("No quote yet — fetch one first")]
    NoQuote,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for momentum
pub type Result<T> = std::result::Result<T, QuoteError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}
