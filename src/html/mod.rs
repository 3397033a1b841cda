//! Lexical HTML scanning
//!
//! This module locates image tags and reads their attributes without
//! building a document tree:
//! - [`extract_image_tags`] finds `<img ...>` substrings in document order
//! - [`extract_attribute`] reads a double-quoted attribute value from one tag
//!
//! Malformed markup may under- or over-match; no attempt is made to handle
//! quoting styles or `>` inside attribute values.

mod attributes;
mod tags;

pub use attributes::{extract_attribute, has_attribute};
pub use tags::extract_image_tags;
