use crate::ui::components::AnnotatedCodeViewer;
use dioxus::prelude::*;
use folio_engine::{SnippetRef, SnippetRegistry};

/// Resolves an `@snippet(...)` block against the registry in context.
#[component]
pub fn SnippetEmbed(snippet: SnippetRef) -> Element {
    let registry = try_use_context::<SnippetRegistry>().unwrap_or_default();

    let Some(code) = registry.get(&snippet.id).cloned() else {
        log::warn!("Unknown snippet referenced: {}", snippet.id);
        return rsx! {
            div {
                class: "snippet-missing",
                "Unknown snippet: "
                code { "{snippet.id}" }
            }
        };
    };
    let annotations = registry.annotations_for(&code.id);

    rsx! {
        figure {
            class: "snippet",
            if !code.title.is_empty() {
                h4 { class: "snippet-title", "{code.title}" }
            }
            if !code.description.is_empty() {
                p { class: "snippet-description", "{code.description}" }
            }
            AnnotatedCodeViewer { key: "{code.id}", snippet: code.clone(), annotations }
            if let Some(caption) = snippet.caption {
                figcaption { class: "snippet-caption", "{caption}" }
            }
        }
    }
}
