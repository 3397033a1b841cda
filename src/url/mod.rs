//! URL handling module for Logo-Scout
//!
//! This module turns image sources into absolute URLs and derives the
//! base URL a page was actually served from.

mod absolute;
mod base;

// Re-export main functions
pub use absolute::to_absolute;
pub use base::effective_base_url;
