use crate::ui::components::InlineText;
use dioxus::prelude::*;

/// Paragraph text keeps its inner line breaks (`white-space: pre-line`).
#[component]
pub fn Paragraph(text: String) -> Element {
    rsx! {
        p {
            class: "paragraph",
            InlineText { text }
        }
    }
}
