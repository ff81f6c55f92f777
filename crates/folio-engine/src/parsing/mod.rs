pub mod blocks;
pub mod inline;
pub mod normalize;
pub mod slug;
pub mod toc;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, ContentBlock, LineClassifier};
use normalize::normalize_newlines;

/// Parses authored rich text into render-ready blocks.
///
/// `id_prefix` namespaces heading ids so several parses on one page (one per
/// content section, say) do not collide. Never fails: malformed directives
/// come back as paragraphs, and an empty result means there is nothing to
/// render.
pub fn parse_blocks(raw: &str, id_prefix: &str) -> Vec<ContentBlock> {
    let text = normalize_newlines(raw);
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(id_prefix);

    for line in text.split('\n') {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}
