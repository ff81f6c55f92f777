//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser uses these
//! constants; it never hardcodes `[` or `](`.

pub mod link;

pub use link::Link;
