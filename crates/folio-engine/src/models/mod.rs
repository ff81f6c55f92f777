pub mod localized;
pub mod project;
pub mod snippet;

pub use localized::{FALLBACK_LANGUAGE, LocalizedText};
pub use project::{ContentSection, Project, SiteContent, SiteProfile};
pub use snippet::{CodeAnnotation, CodeSnippet, SnippetRegistry};
