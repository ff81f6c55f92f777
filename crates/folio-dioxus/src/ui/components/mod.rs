pub mod annotation_detail;
pub mod annotation_tooltip;
pub mod block;
pub mod code_viewer;
pub mod content_blocks;
pub mod empty_content;
pub mod error_screen;
pub mod heading;
pub mod home_page;
pub mod image_carousel;
pub mod inline_text;
pub mod list;
pub mod paragraph;
pub mod project_list;
pub mod project_page;
pub mod snippet_embed;
pub mod table_of_contents;
pub mod video_embed;

pub use annotation_detail::AnnotationDetail;
pub use annotation_tooltip::AnnotationTooltip;
pub use block::Block;
pub use code_viewer::{AnnotatedCodeViewer, CodeLine};
pub use content_blocks::{ContentBlocks, RichText};
pub use empty_content::EmptyContent;
pub use error_screen::ErrorScreen;
pub use heading::Heading;
pub use home_page::HomePage;
pub use image_carousel::{ImageCarousel, SingleImage};
pub use inline_text::InlineText;
pub use list::BulletList;
pub use paragraph::Paragraph;
pub use project_list::ProjectList;
pub use project_page::ProjectPage;
pub use snippet_embed::SnippetEmbed;
pub use table_of_contents::TableOfContents;
pub use video_embed::VideoEmbed;

use dioxus::prelude::try_use_context;
use std::path::PathBuf;

/// Content directory that `codePath` values resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRoot(pub PathBuf);

/// Display language used to resolve localized text.
#[derive(Debug, Clone, PartialEq)]
pub struct Language(pub String);

/// The active language from context, falling back to the default.
pub fn use_language() -> String {
    try_use_context::<Language>()
        .map(|Language(lang)| lang)
        .unwrap_or_else(|| folio_config::DEFAULT_LANGUAGE.to_string())
}
