use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

/// A code listing that project pages can embed with `@snippet(id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Inline code text. Wins over `code_path` when not blank.
    #[serde(default)]
    pub code: Option<String>,
    /// File under the content directory to load the code from.
    #[serde(default)]
    pub code_path: Option<RelativePathBuf>,
    #[serde(default)]
    pub language: String,
}

impl CodeSnippet {
    /// Inline code, if it has any non-whitespace content.
    pub fn inline_code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.trim().is_empty())
    }
}

/// Explanatory metadata bound to one line of a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnnotation {
    pub snippet_id: String,
    /// 1-based line number in the snippet.
    pub line_number: u32,
    #[serde(default)]
    pub start_col: u32,
    #[serde(default)]
    pub end_col: u32,
    #[serde(default)]
    pub tooltip_title: String,
    #[serde(default)]
    pub tooltip_content: String,
    /// Free-form tag such as `concept` or `gotcha`.
    #[serde(default)]
    pub detail_type: String,
    #[serde(default)]
    pub detail_content: String,
}

/// All known snippets and their annotations, as loaded from the content directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetRegistry {
    snippets: Vec<CodeSnippet>,
    annotations: Vec<CodeAnnotation>,
}

impl SnippetRegistry {
    pub fn new(snippets: Vec<CodeSnippet>, annotations: Vec<CodeAnnotation>) -> Self {
        Self {
            snippets,
            annotations,
        }
    }

    /// Looks up a snippet by id. The first registered snippet wins on duplicates.
    pub fn get(&self, id: &str) -> Option<&CodeSnippet> {
        self.snippets.iter().find(|snippet| snippet.id == id)
    }

    /// Annotations for one snippet, in list order.
    pub fn annotations_for(&self, id: &str) -> Vec<CodeAnnotation> {
        self.annotations
            .iter()
            .filter(|annotation| annotation.snippet_id == id)
            .cloned()
            .collect()
    }
}
