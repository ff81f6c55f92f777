//! # Inline Parsing
//!
//! Inline parsing runs at render time over paragraph and list-item text,
//! separately from block parsing.
//!
//! The only inline construct is the `[label](href)` link, and it is only
//! recognised when the target is on the allow-list (see [`kinds::Link`]).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Link)
//! - **`kinds`**: inline types with owned delimiters (Link)
//! - **`cursor`**: `Cursor` for byte-wise scanning with char-safe stepping
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
