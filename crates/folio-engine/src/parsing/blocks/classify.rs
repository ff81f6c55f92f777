use super::{
    kinds::{Heading, HeadingLine, Image, ListItem, Snippet, Video},
    types::{ImageRef, SnippetRef},
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading(HeadingLine),
    Image(ImageRef),
    /// A `@youtube(...)` line. `embed_url` is `None` when the url was not recognised.
    Video {
        line: &'a str,
        embed_url: Option<String>,
    },
    /// A `@snippet(...)` line. `snippet` is `None` when the id is blank.
    Snippet {
        line: &'a str,
        snippet: Option<SnippetRef>,
    },
    ListItem(&'a str),
    /// Anything else; the untrimmed line, for paragraph text.
    Text(&'a str),
}

impl LineClass<'_> {
    /// Whether this line opens a block of its own and so ends a running paragraph.
    pub fn starts_block(&self) -> bool {
        !matches!(self, LineClass::Blank | LineClass::Text(_))
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line (without its trailing newline).
    ///
    /// Precedence follows the directive table: heading, image, video, snippet, list.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let line = raw.trim();
        if line.is_empty() {
            return LineClass::Blank;
        }
        if let Some(heading) = Heading::parse(line) {
            return LineClass::Heading(heading);
        }
        if let Some(image) = Image::parse(line) {
            return LineClass::Image(image);
        }
        if let Some(url) = Video::directive(line) {
            return LineClass::Video {
                line,
                embed_url: Video::embed_url(url),
            };
        }
        if let Some(args) = Snippet::directive(line) {
            return LineClass::Snippet {
                line,
                snippet: Snippet::parse_args(args),
            };
        }
        if let Some(item) = ListItem::parse(line) {
            return LineClass::ListItem(item);
        }
        LineClass::Text(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineClass<'_> {
        LineClassifier.classify(line)
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert_eq!(classify("   \t"), LineClass::Blank);
    }

    #[test]
    fn directives_are_recognised_after_trimming() {
        assert!(matches!(classify("  ## Title  "), LineClass::Heading(_)));
        assert!(matches!(classify(" ![a](b.png) "), LineClass::Image(_)));
        assert!(matches!(classify(" - item"), LineClass::ListItem("item")));
    }

    #[test]
    fn unrecognised_video_keeps_literal_line() {
        assert_eq!(
            classify("@youtube(not a url)"),
            LineClass::Video {
                line: "@youtube(not a url)",
                embed_url: None,
            }
        );
    }

    #[test]
    fn text_lines_are_not_trimmed() {
        assert_eq!(classify("  indented text"), LineClass::Text("  indented text"));
    }

    #[test]
    fn only_text_and_blank_continue_paragraphs() {
        assert!(!classify("text").starts_block());
        assert!(!classify("").starts_block());
        assert!(classify("@snippet()").starts_block());
        assert!(classify("- item").starts_block());
    }
}
