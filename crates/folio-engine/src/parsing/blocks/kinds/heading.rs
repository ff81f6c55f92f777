use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::HeadingLevel;

/// `##`/`###` headings, optionally hidden from the table of contents with `!`.
pub struct Heading;

/// A recognised heading line before id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    pub level: HeadingLevel,
    pub text: String,
    pub hidden: bool,
}

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{2,3})(?:(!)\s*|\s+)(\S.*)$").expect("heading pattern compiles")
});

impl Heading {
    pub fn parse(line: &str) -> Option<HeadingLine> {
        let caps = HEADING.captures(line)?;
        let level = match caps[1].len() {
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        };
        Some(HeadingLine {
            level,
            text: caps[3].trim().to_string(),
            hidden: caps.get(2).is_some(),
        })
    }
}
