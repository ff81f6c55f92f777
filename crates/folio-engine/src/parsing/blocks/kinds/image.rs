use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::ImageRef;

/// A line consisting of exactly one `![alt](src)`.
pub struct Image;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)$").expect("image pattern compiles"));

impl Image {
    pub fn parse(line: &str) -> Option<ImageRef> {
        let caps = IMAGE.captures(line)?;
        let src = caps[2].trim();
        if src.is_empty() {
            return None;
        }
        Some(ImageRef {
            alt: caps[1].trim().to_string(),
            src: src.to_string(),
        })
    }
}
