use dioxus::prelude::*;
use folio_engine::{SiteContent, io};
use std::path::PathBuf;
use std::rc::Rc;

use super::components::{
    ContentRoot, EmptyContent, ErrorScreen, HomePage, Language, ProjectList, ProjectPage,
};

const SOLARIZED_LIGHT_CSS: &str = include_str!("../assets/solarized-light.css");

/// The page currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Projects,
    Project(String),
}

impl Page {
    /// Maps a site-internal link (`/`, `/projects`, `/projects/<slug>`) to a page.
    pub fn from_href(href: &str) -> Option<Page> {
        let path = href.split(['#', '?']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Page::Home),
            ["projects"] => Some(Page::Projects),
            ["projects", slug] => Some(Page::Project(slug.to_string())),
            _ => None,
        }
    }
}

#[component]
pub fn App(content_path: PathBuf, language: String) -> Element {
    let site = use_hook(|| {
        io::load_site(&content_path)
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });

    match site {
        Ok(site) => rsx! {
            Site { site, content_path, language }
        },
        Err(message) => {
            log::warn!("Failed to load content from {}: {message}", content_path.display());
            rsx! {
                style { {SOLARIZED_LIGHT_CSS} }
                ErrorScreen {
                    title: "Could not load site content".to_string(),
                    message: format!("Content directory: {}", content_path.display()),
                    details: Some(message),
                }
            }
        }
    }
}

/// Loaded site: provides the shared contexts and switches between pages.
#[component]
pub fn Site(site: Rc<SiteContent>, content_path: PathBuf, language: String) -> Element {
    use_context_provider(|| site.snippets.clone());
    use_context_provider(|| ContentRoot(content_path.clone()));
    use_context_provider(|| Language(language.clone()));
    let mut page = use_context_provider(|| Signal::new(Page::Home));

    let current = page.read().clone();
    let body = match current {
        Page::Home => rsx! {
            HomePage {
                profile: site.profile.clone(),
                on_browse: move |_| page.set(Page::Projects),
            }
        },
        Page::Projects => rsx! {
            ProjectList {
                projects: site.projects.clone(),
                on_open: move |slug: String| page.set(Page::Project(slug)),
            }
        },
        Page::Project(slug) => match site.project(&slug) {
            Some(project) => rsx! {
                ProjectPage { key: "{slug}", project: project.clone() }
            },
            None => rsx! {
                EmptyContent { message: format!("No project named '{slug}'.") }
            },
        },
    };

    rsx! {
        style { {SOLARIZED_LIGHT_CSS} }
        div {
            class: "app-container",
            nav {
                class: "site-nav",
                span { class: "site-name", "{site.profile.name}" }
                button {
                    class: if page() == Page::Home { "nav-link active" } else { "nav-link" },
                    onclick: move |_| page.set(Page::Home),
                    "Home"
                }
                button {
                    class: if page() == Page::Projects { "nav-link active" } else { "nav-link" },
                    onclick: move |_| page.set(Page::Projects),
                    "Projects"
                }
            }
            main {
                class: "main-content",
                {body}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_page_from_internal_href() {
        assert_eq!(Page::from_href("/"), Some(Page::Home));
        assert_eq!(Page::from_href("/projects"), Some(Page::Projects));
        assert_eq!(Page::from_href("/projects/"), Some(Page::Projects));
        assert_eq!(
            Page::from_href("/projects/folio#how"),
            Some(Page::Project("folio".to_string()))
        );
        assert_eq!(Page::from_href("/about/team"), None);
    }

    fn write_site(dir: &TempDir) {
        fs::write(
            dir.path().join("site.json"),
            r###"{ "name": "Ada Lovelace", "tagline": "Engineer", "intro": "## Welcome\nHello there." }"###,
        )
        .unwrap();
        fs::write(
            dir.path().join("projects.json"),
            r#"[{ "slug": "folio", "title": "Folio" }]"#,
        )
        .unwrap();
        fs::write(dir.path().join("snippets.json"), "[]").unwrap();
    }

    #[test]
    fn test_app_renders_home_page() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);

        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                content_path: dir.path().to_path_buf(),
                language: "en".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Welcome"));
        assert!(html.contains("id=\"intro-welcome\""));
    }

    #[test]
    fn test_app_shows_error_screen_for_broken_content() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.json"), "{ nope").unwrap();

        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                content_path: dir.path().to_path_buf(),
                language: "en".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Could not load site content"));
        assert!(html.contains("site.json"));
    }
}
