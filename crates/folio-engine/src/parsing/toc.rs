use serde::Serialize;

use super::blocks::{ContentBlock, HeadingLevel};

/// One table-of-contents line linking to a heading id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: HeadingLevel,
    pub text: String,
    pub id: String,
}

/// Collects the visible headings of one or more parses, in order.
///
/// Headings marked hidden (`##!`) are skipped.
pub fn table_of_contents<'a>(blocks: impl IntoIterator<Item = &'a ContentBlock>) -> Vec<TocEntry> {
    blocks
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Heading {
                level,
                text,
                id,
                toc_hidden: false,
            } => Some(TocEntry {
                level: *level,
                text: text.clone(),
                id: id.clone(),
            }),
            _ => None,
        })
        .collect()
}
