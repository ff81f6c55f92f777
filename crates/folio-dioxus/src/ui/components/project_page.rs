use crate::ui::components::{
    ContentBlocks, EmptyContent, SnippetEmbed, TableOfContents, use_language,
};
use dioxus::prelude::*;
use folio_engine::{
    ContentBlock, HeadingLevel, Project, SnippetRef, TocEntry, parse_blocks, table_of_contents,
};

/// One parsed chunk of the write-up, with the id its title anchors to.
struct ParsedSection {
    id: String,
    title: String,
    blocks: Vec<ContentBlock>,
}

/// Id prefix for the description parse. Distinct from every section prefix,
/// so no description heading can take a section's id.
pub fn description_prefix(slug: &str) -> String {
    format!("{slug}-description")
}

/// Id prefix for section `number` (1-based); also the section title's anchor.
pub fn section_prefix(slug: &str, number: usize) -> String {
    format!("{slug}-section-{number}")
}

/// Full project write-up: description and sections, each parsed once with
/// its own id prefix so heading ids never collide across sections.
#[component]
pub fn ProjectPage(project: Project) -> Element {
    let language = use_language();

    let description = parse_blocks(
        project.description.resolve(&language),
        &description_prefix(&project.slug),
    );
    let sections: Vec<ParsedSection> = project
        .sections
        .iter()
        .enumerate()
        .map(|(n, section)| {
            let id = section_prefix(&project.slug, n + 1);
            ParsedSection {
                blocks: parse_blocks(section.body.resolve(&language), &id),
                title: section.title.resolve(&language).to_string(),
                id,
            }
        })
        .collect();

    let mut toc = table_of_contents(&description);
    for section in &sections {
        if !section.title.trim().is_empty() {
            toc.push(TocEntry {
                level: HeadingLevel::H2,
                text: section.title.clone(),
                id: section.id.clone(),
            });
        }
        toc.extend(table_of_contents(&section.blocks));
    }

    let title = project.title.resolve(&language).to_string();
    let summary = project.summary.resolve(&language).to_string();
    let render_snippet = move |snippet: SnippetRef| rsx! { SnippetEmbed { snippet } };
    let is_empty = description.is_empty() && sections.is_empty();

    rsx! {
        article {
            class: "project-page",
            header {
                class: "project-header",
                h1 { "{title}" }
                p { class: "project-summary", "{summary}" }
                if !project.tags.is_empty() {
                    ul {
                        class: "project-tags",
                        for tag in project.tags.iter() {
                            li { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
            }
            TableOfContents { entries: toc }
            if is_empty {
                EmptyContent { message: "This project has no write-up yet.".to_string() }
            }
            ContentBlocks { blocks: description, render_snippet }
            for part in sections.into_iter() {
                section {
                    key: "{part.id}",
                    class: "project-section",
                    if !part.title.trim().is_empty() {
                        h2 { id: "{part.id}", class: "section-title", "{part.title}" }
                    }
                    ContentBlocks { blocks: part.blocks.clone(), render_snippet }
                }
            }
        }
    }
}
