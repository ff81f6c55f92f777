use crate::models::{CodeAnnotation, CodeSnippet, Project, SiteContent, SiteProfile, SnippetRegistry};
use relative_path::{Component, RelativePath, RelativePathBuf};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const SITE_FILE: &str = "site.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SNIPPETS_FILE: &str = "snippets.json";
pub const ANNOTATIONS_FILE: &str = "annotations.json";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Path escapes the content directory: {0}")]
    OutsideContentDir(RelativePathBuf),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a code file referenced by a snippet's `codePath`
pub fn read_code_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let normalized = relative_path.normalize();
    if normalized
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(IoError::OutsideContentDir(relative_path.to_relative_path_buf()));
    }

    let absolute_path = normalized.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Load everything the site renders from a content directory.
///
/// `site.json`, `projects.json` and `snippets.json` are required;
/// `annotations.json` is optional and defaults to no annotations.
pub fn load_site(content_root: &Path) -> Result<SiteContent, IoError> {
    validate_content_dir(content_root)?;

    let profile: SiteProfile = read_json(&content_root.join(SITE_FILE))?;
    let projects: Vec<Project> = read_json(&content_root.join(PROJECTS_FILE))?;
    let snippets: Vec<CodeSnippet> = read_json(&content_root.join(SNIPPETS_FILE))?;
    let annotations: Vec<CodeAnnotation> =
        read_optional_json(&content_root.join(ANNOTATIONS_FILE))?.unwrap_or_default();

    log::info!(
        "loaded {} project(s), {} snippet(s), {} annotation(s) from {}",
        projects.len(),
        snippets.len(),
        annotations.len(),
        content_root.display()
    );

    Ok(SiteContent {
        profile,
        projects,
        snippets: SnippetRegistry::new(snippets, annotations),
    })
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    read_optional_json(path)?.ok_or_else(|| IoError::NotFound(path.to_path_buf()))
}

fn read_optional_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, IoError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| IoError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
