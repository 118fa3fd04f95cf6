//! Export surfaces
//!
//! Clipboard, image card, and share-link export for the current quote.
//! Failures here never affect application state — callers surface them as
//! dismissable notices.

pub mod clipboard;
pub mod image;
pub mod share;

pub use clipboard::copy_to_clipboard;
pub use image::{render_card, save_and_open_card, save_card};
pub use share::{open_share_link, share_link, share_text};
