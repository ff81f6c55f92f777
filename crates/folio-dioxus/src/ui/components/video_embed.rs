use dioxus::prelude::*;

/// Responsive iframe for an `@youtube(...)` block.
#[component]
pub fn VideoEmbed(embed_url: String) -> Element {
    rsx! {
        div {
            class: "video-embed",
            iframe {
                src: "{embed_url}",
                title: "Embedded video",
                allow: "accelerometer; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
            }
        }
    }
}
