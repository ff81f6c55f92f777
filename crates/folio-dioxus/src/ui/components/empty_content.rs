use dioxus::prelude::*;

#[component]
pub fn EmptyContent(message: String) -> Element {
    rsx! {
        div {
            class: "empty-content",
            p { "{message}" }
        }
    }
}
