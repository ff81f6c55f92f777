use crate::ui::app::Page;
use dioxus::prelude::*;
use folio_engine::{InlineNode, parse_inline};

/// Renders paragraph or list-item text with its allowed links.
#[component]
pub fn InlineText(text: String) -> Element {
    let page = try_use_context::<Signal<Page>>();
    let nodes = parse_inline(&text);

    rsx! {
        for node in nodes.into_iter() {
            {render_node(node, page)}
        }
    }
}

fn render_node(node: InlineNode, page: Option<Signal<Page>>) -> Element {
    match node {
        InlineNode::Text(text) => rsx! { span { "{text}" } },
        InlineNode::Link { label, href } => {
            let internal = href.starts_with('/');
            let class = if internal { "internal-link" } else { "external-link" };
            rsx! {
                a {
                    class,
                    href: "{href}",
                    target: if !internal { "_blank" },
                    rel: if !internal { "noopener noreferrer" },
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        follow_link(&href, page);
                    },
                    "{label}"
                }
            }
        }
    }
}

fn follow_link(href: &str, page: Option<Signal<Page>>) {
    if href.starts_with('/') {
        match (Page::from_href(href), page) {
            (Some(target), Some(mut page)) => page.set(target),
            _ => log::warn!("No page for internal link {href}"),
        }
        return;
    }
    if let Err(e) = open_url(href) {
        log::warn!("Failed to open URL {href}: {e}");
    }
}

/// Opens a URL in the system's default browser
fn open_url(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    Ok(())
}
