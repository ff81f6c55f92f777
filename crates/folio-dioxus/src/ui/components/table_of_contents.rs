use dioxus::prelude::*;
use folio_engine::TocEntry;

#[component]
pub fn TableOfContents(entries: Vec<TocEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "table-of-contents",
            h4 { "Contents" }
            ul {
                for entry in entries.into_iter() {
                    li {
                        key: "{entry.id}",
                        class: format!("toc-entry level-{}", entry.level.as_u8()),
                        a { href: "#{entry.id}", "{entry.text}" }
                    }
                }
            }
        }
    }
}
