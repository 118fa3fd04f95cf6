//! Configuration constants for momentum

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "momentum";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Momentum/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Provider-related configuration
pub mod providers {
    /// Default Quotable API server
    pub const QUOTABLE_DEFAULT_SERVER: &str = "https://api.quotable.io";

    /// Default ZenQuotes API server
    pub const ZENQUOTES_DEFAULT_SERVER: &str = "https://zenquotes.io";
}

/// Export-related configuration
pub mod export {
    /// Static watermark rendered on image cards and appended to share text
    pub const WATERMARK: &str = "— </joe>";

    /// Image card width in pixels
    pub const CARD_WIDTH: u32 = 1000;

    /// Minimum image card height in pixels (grows with wrapped text)
    pub const CARD_MIN_HEIGHT: u32 = 420;

    /// Share-link endpoint (text is appended URL-encoded)
    pub const SHARE_BASE_URL: &str = "https://wa.me/?text=";
}
