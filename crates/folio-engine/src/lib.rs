pub mod io;
pub mod models;
pub mod parsing;
pub mod viewer;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{
    blocks::{ContentBlock, HeadingLevel, ImageRef, SnippetRef},
    inline::{InlineNode, parse_inline},
    parse_blocks,
    toc::{TocEntry, table_of_contents},
};
pub use viewer::*;
