/// A piece of inline paragraph or list-item text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Literal text, including any link markup that was not allowed.
    Text(String),
    /// A `[label](href)` link whose target passed the allow-list.
    Link { label: String, href: String },
}
