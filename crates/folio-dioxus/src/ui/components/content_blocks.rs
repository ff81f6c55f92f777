use crate::ui::components::Block;
use dioxus::prelude::*;
use folio_engine::{ContentBlock, SnippetRef, parse_blocks};

/// Renders an already parsed block list in order.
///
/// `Snippet` blocks are handed to `render_snippet`, so the caller decides
/// what an embedded snippet looks like.
#[component]
pub fn ContentBlocks(
    blocks: Vec<ContentBlock>,
    render_snippet: Callback<SnippetRef, Element>,
) -> Element {
    rsx! {
        div {
            class: "content-blocks",
            for (index, block) in blocks.into_iter().enumerate() {
                Block { key: "{index}", block, render_snippet }
            }
        }
    }
}

/// Parses `text` and renders the resulting blocks.
#[component]
pub fn RichText(
    text: String,
    id_prefix: String,
    render_snippet: Callback<SnippetRef, Element>,
) -> Element {
    let blocks = parse_blocks(&text, &id_prefix);
    rsx! {
        ContentBlocks { blocks, render_snippet }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(text: String) -> Element {
        rsx! {
            RichText {
                text,
                id_prefix: "about".to_string(),
                render_snippet: move |snippet: SnippetRef| rsx! {
                    div { class: "snippet-stub", "snippet:{snippet.id}" }
                },
            }
        }
    }

    fn render_text(text: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                text: text.to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_renders_every_block_kind() {
        let html = render_text(
            "## Overview\n\
             Some text.\n\
             \n\
             - one\n\
             - two\n\
             \n\
             ![Diagram](/img/a.png)\n\
             \n\
             @youtube(https://youtu.be/dQw4w9WgXcQ)\n\
             @snippet(parser)",
        );

        assert!(html.contains("<h2 id=\"about-overview\""));
        assert!(html.contains("Some text."));
        assert!(html.contains("<li"));
        assert!(html.contains("alt=\"Diagram\""));
        assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert!(html.contains("snippet:parser"));
    }

    #[test]
    fn test_hidden_heading_is_still_rendered() {
        let html = render_text("##! Quiet");

        assert!(html.contains("Quiet"));
        assert!(html.contains("about-quiet"));
    }

    #[test]
    fn test_empty_text_renders_no_blocks() {
        let html = render_text("  \n\n ");

        assert!(html.contains("content-blocks"));
        assert!(!html.contains("<p"));
        assert!(!html.contains("<h2"));
    }
}
