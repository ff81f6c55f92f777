use crate::ui::components::RichText;
use dioxus::prelude::*;
use folio_engine::{CodeAnnotation, SnippetRef};

/// Pinned explanation for a clicked annotation. Stays open until closed.
///
/// Tooltip and detail text go through the block parser; snippet directives
/// inside them are shown by id rather than embedded.
#[component]
pub fn AnnotationDetail(annotation: CodeAnnotation, on_close: Callback<()>) -> Element {
    let prefix = format!("{}-line-{}", annotation.snippet_id, annotation.line_number);
    let render_snippet = move |snippet: SnippetRef| {
        rsx! {
            code { class: "snippet-reference", "{snippet.id}" }
        }
    };

    rsx! {
        section {
            class: "annotation-detail",
            header {
                class: "annotation-detail-header",
                if !annotation.detail_type.is_empty() {
                    span { class: "annotation-type", "{annotation.detail_type}" }
                }
                h4 { class: "annotation-title", "{annotation.tooltip_title}" }
                span { class: "annotation-line", "Line {annotation.line_number}" }
                button {
                    class: "annotation-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            RichText {
                text: annotation.tooltip_content.clone(),
                id_prefix: format!("{prefix}-summary"),
                render_snippet,
            }
            if !annotation.detail_content.trim().is_empty() {
                div {
                    class: "annotation-explanation",
                    h5 { "Detailed explanation" }
                    RichText {
                        text: annotation.detail_content.clone(),
                        id_prefix: format!("{prefix}-detail"),
                        render_snippet,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn annotation(detail_content: &str) -> CodeAnnotation {
        CodeAnnotation {
            snippet_id: "parser".to_string(),
            line_number: 12,
            start_col: 0,
            end_col: 0,
            tooltip_title: "Line classifier".to_string(),
            tooltip_content: "Sorts each line into a kind.".to_string(),
            detail_type: "pattern".to_string(),
            detail_content: detail_content.to_string(),
        }
    }

    #[component]
    fn Harness(annotation: CodeAnnotation) -> Element {
        rsx! {
            AnnotationDetail { annotation, on_close: move |_| {} }
        }
    }

    fn render_detail(annotation: CodeAnnotation) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { annotation });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_detail_shows_type_title_and_line() {
        let html = render_detail(annotation(""));

        assert!(html.contains("pattern"));
        assert!(html.contains("Line classifier"));
        assert!(html.contains("Line 12"));
        assert!(html.contains("Sorts each line into a kind."));
        assert!(!html.contains("Detailed explanation"));
    }

    #[test]
    fn test_detail_content_parsed_as_blocks() {
        let html = render_detail(annotation("## Why\n- cheap\n- simple"));

        assert!(html.contains("Detailed explanation"));
        assert!(html.contains("id=\"parser-line-12-detail-why\""));
        assert_eq!(html.matches("<li").count(), 2);
    }
}
