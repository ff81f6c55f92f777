use crate::ui::components::InlineText;
use dioxus::prelude::*;
use folio_engine::HeadingLevel;

#[component]
pub fn Heading(level: HeadingLevel, text: String, id: String) -> Element {
    let class_name = format!("heading level-{}", level.as_u8());

    match level {
        HeadingLevel::H2 => rsx! { h2 { id, class: "{class_name}", InlineText { text } } },
        HeadingLevel::H3 => rsx! { h3 { id, class: "{class_name}", InlineText { text } } },
    }
}
