use crate::ui::components::{RichText, SnippetEmbed, use_language};
use dioxus::prelude::*;
use folio_engine::{SiteProfile, SnippetRef};

#[component]
pub fn HomePage(profile: SiteProfile, on_browse: Callback<()>) -> Element {
    let language = use_language();
    let tagline = profile.tagline.resolve(&language).to_string();
    let intro = profile.intro.resolve(&language).to_string();

    rsx! {
        div {
            class: "home-page",
            header {
                class: "home-header",
                h1 { "{profile.name}" }
                if !tagline.is_empty() {
                    p { class: "tagline", "{tagline}" }
                }
            }
            RichText {
                text: intro,
                id_prefix: "intro".to_string(),
                render_snippet: move |snippet: SnippetRef| rsx! { SnippetEmbed { snippet } },
            }
            button {
                class: "browse-projects",
                onclick: move |_| on_browse.call(()),
                "Browse projects"
            }
        }
    }
}
