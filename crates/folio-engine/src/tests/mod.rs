//! Shared fixtures for unit tests across the crate.

use std::fs;
use tempfile::TempDir;

use crate::models::{CodeAnnotation, CodeSnippet};

pub fn create_test_content_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes `content` to `relative` under the temp dir, creating parent folders.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn snippet(id: &str, code: Option<&str>) -> CodeSnippet {
    CodeSnippet {
        id: id.to_string(),
        title: format!("{id} title"),
        description: String::new(),
        code: code.map(str::to_string),
        code_path: None,
        language: "rust".to_string(),
    }
}

pub fn annotation(snippet_id: &str, line_number: u32, title: &str) -> CodeAnnotation {
    CodeAnnotation {
        snippet_id: snippet_id.to_string(),
        line_number,
        start_col: 0,
        end_col: 0,
        tooltip_title: title.to_string(),
        tooltip_content: format!("About {title}"),
        detail_type: "concept".to_string(),
        detail_content: String::new(),
    }
}
