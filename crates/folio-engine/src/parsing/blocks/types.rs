use serde::Serialize;

/// Heading depth. Content only uses `##` and `###`; `#` is the page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// An image reference from `![alt](src)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub alt: String,
    pub src: String,
}

/// An embedded snippet from `@snippet(id, caption)`.
///
/// Emitted even when the id is unknown so the page can show a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetRef {
    pub id: String,
    pub caption: Option<String>,
}

/// One render-ready unit of parsed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContentBlock {
    Heading {
        level: HeadingLevel,
        text: String,
        /// Unique within one parse, namespaced by the caller's prefix.
        id: String,
        /// Set by `##!`/`###!`: rendered, but left out of the table of contents.
        toc_hidden: bool,
    },
    /// Plain text with line breaks preserved; may contain `[label](url)` links.
    Paragraph { text: String },
    Image(ImageRef),
    /// Two or more consecutive images, in source order.
    Carousel { images: Vec<ImageRef> },
    Snippet(SnippetRef),
    Video { embed_url: String },
    List { items: Vec<String> },
}
