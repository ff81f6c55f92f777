use serde::{Deserialize, Serialize};

use super::{LocalizedText, SnippetRegistry};

/// Home page content from `site.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub name: String,
    #[serde(default)]
    pub tagline: LocalizedText,
    /// Rich text rendered through the block parser.
    #[serde(default)]
    pub intro: LocalizedText,
}

/// One titled chunk of a project write-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub body: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub summary: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

/// Everything the site renders, loaded from one content directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    pub profile: SiteProfile,
    pub projects: Vec<Project>,
    pub snippets: SnippetRegistry,
}

impl SiteContent {
    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }
}
