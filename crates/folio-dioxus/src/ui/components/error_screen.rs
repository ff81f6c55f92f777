use dioxus::prelude::*;

/// Shown instead of the site when the content directory cannot be loaded.
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { class: "error-title", "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
            p {
                class: "error-hint",
                "Check the JSON files in the content directory and restart folio."
            }
        }
    }
}
