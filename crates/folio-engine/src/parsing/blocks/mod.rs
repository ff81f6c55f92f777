//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line is classified into a
//!    `LineClass` (blank, heading, image, video, snippet, list item, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` collects multi-line
//!    runs (paragraphs, image runs, lists) and emits `ContentBlock`s as they close
//!
//! ## Modules
//!
//! - **`types`**: `ContentBlock` and its payload types
//! - **`kinds`**: directive types that own their syntax (Heading, Image, Video, Snippet, ListItem)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks come out in source order
//! - A carousel always holds two or more images
//! - Malformed directives come out as paragraphs holding the literal line

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{ContentBlock, HeadingLevel, ImageRef, SnippetRef};
