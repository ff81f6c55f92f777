use crate::ui::components::{EmptyContent, use_language};
use dioxus::prelude::*;
use folio_engine::Project;

#[component]
pub fn ProjectList(projects: Vec<Project>, on_open: Callback<String>) -> Element {
    let language = use_language();

    if projects.is_empty() {
        return rsx! {
            EmptyContent { message: "No projects yet.".to_string() }
        };
    }

    rsx! {
        div {
            class: "project-list",
            h1 { "Projects" }
            for project in projects.into_iter() {
                ProjectCard {
                    key: "{project.slug}",
                    slug: project.slug.clone(),
                    title: project.title.resolve(&language).to_string(),
                    summary: project.summary.resolve(&language).to_string(),
                    tags: project.tags.clone(),
                    on_open,
                }
            }
        }
    }
}

#[component]
fn ProjectCard(
    slug: String,
    title: String,
    summary: String,
    tags: Vec<String>,
    on_open: Callback<String>,
) -> Element {
    rsx! {
        div {
            class: "project-card",
            onclick: move |_| on_open.call(slug.clone()),
            h3 { "{title}" }
            if !summary.is_empty() {
                p { class: "project-summary", "{summary}" }
            }
            if !tags.is_empty() {
                ul {
                    class: "project-tags",
                    for tag in tags.iter() {
                        li { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
