use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::SnippetRef;

/// `@snippet(id)` and `@snippet(id, caption)` directives.
pub struct Snippet;

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@snippet\((.*)\)$").expect("snippet pattern compiles"));

impl Snippet {
    pub const QUOTES: [char; 2] = ['"', '\''];

    /// Returns the raw argument if `line` is a snippet directive.
    pub fn directive(line: &str) -> Option<&str> {
        DIRECTIVE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Splits a directive argument into id and optional caption.
    ///
    /// Returns `None` when the id is blank.
    pub fn parse_args(args: &str) -> Option<SnippetRef> {
        let (id, caption) = match args.split_once(',') {
            Some((id, caption)) => (id, Some(caption)),
            None => (args, None),
        };

        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let caption = caption
            .map(|c| Self::strip_quotes(c.trim()))
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Some(SnippetRef {
            id: id.to_string(),
            caption,
        })
    }

    /// Removes one layer of matching straight quotes.
    fn strip_quotes(s: &str) -> &str {
        for quote in Self::QUOTES {
            if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
                return &s[1..s.len() - 1];
            }
        }
        s
    }
}
