use crate::ui::components::InlineText;
use dioxus::prelude::*;

#[component]
pub fn BulletList(items: Vec<String>) -> Element {
    rsx! {
        ul {
            class: "bullet-list",
            for (index, item) in items.into_iter().enumerate() {
                li {
                    key: "{index}",
                    class: "bullet-item",
                    InlineText { text: item }
                }
            }
        }
    }
}
