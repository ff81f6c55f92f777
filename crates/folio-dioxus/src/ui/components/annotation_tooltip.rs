use dioxus::prelude::*;
use folio_engine::{CodeAnnotation, TooltipAnchor};

/// Hover preview drawn upwards from `anchor`.
#[component]
pub fn AnnotationTooltip(annotation: CodeAnnotation, anchor: TooltipAnchor) -> Element {
    rsx! {
        div {
            class: "annotation-tooltip",
            role: "tooltip",
            style: "left: {anchor.left}px; top: {anchor.top}px;",
            if !annotation.detail_type.is_empty() {
                span { class: "annotation-type", "{annotation.detail_type}" }
            }
            strong { class: "annotation-title", "{annotation.tooltip_title}" }
            p { class: "annotation-summary", "{annotation.tooltip_content}" }
            span { class: "annotation-hint", "Click for details" }
        }
    }
}
