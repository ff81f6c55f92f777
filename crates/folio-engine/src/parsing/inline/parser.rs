use super::{cursor::Cursor, kinds::Link, types::InlineNode};

/// Splits paragraph or list-item text into text and link nodes.
///
/// `[label](href)` becomes [`InlineNode::Link`] only when `href` passes
/// [`Link::is_allowed`]; otherwise the markup stays in the surrounding text,
/// brackets included. Adjacent text is merged, so plain input yields a single
/// `Text` node and empty input yields nothing.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(link) = try_parse_link(&mut cur) {
            flush_text(&mut out, cur.slice(text_start, start));
            out.push(link);
            text_start = cur.pos();
            continue;
        }
        cur.bump_char();
    }

    flush_text(&mut out, cur.slice(text_start, cur.pos()));
    out
}

/// Attempts to parse an allowed link at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let parsed = (|| {
        cur.eat(Link::OPEN);
        let label = cur.take_until(Link::CLOSE)?;
        cur.eat(Link::CLOSE);
        if !cur.eat(Link::HREF_OPEN) {
            return None;
        }
        let href = cur.take_until(Link::HREF_CLOSE)?.trim();
        cur.eat(Link::HREF_CLOSE);

        if label.trim().is_empty() || !Link::is_allowed(href) {
            return None;
        }
        Some(InlineNode::Link {
            label: label.to_string(),
            href: href.to_string(),
        })
    })();

    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineNode {
        InlineNode::Text(s.to_string())
    }

    fn link(label: &str, href: &str) -> InlineNode {
        InlineNode::Link {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn plain_text_is_one_node() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn allowed_link_between_text() {
        assert_eq!(
            parse_inline("see [the repo](https://github.com/x/y) for more"),
            vec![
                text("see "),
                link("the repo", "https://github.com/x/y"),
                text(" for more"),
            ]
        );
    }

    #[test]
    fn root_relative_and_mailto_links() {
        assert_eq!(
            parse_inline("[home](/)[mail](mailto:a@b.c)"),
            vec![link("home", "/"), link("mail", "mailto:a@b.c")]
        );
    }

    #[test]
    fn disallowed_link_stays_literal() {
        assert_eq!(
            parse_inline("click [me](javascript:alert(1)) now"),
            vec![text("click [me](javascript:alert(1)) now")]
        );
    }

    #[test]
    fn relative_link_stays_literal() {
        assert_eq!(
            parse_inline("[docs](docs/readme.md)"),
            vec![text("[docs](docs/readme.md)")]
        );
    }

    #[test]
    fn unclosed_markup_is_text() {
        assert_eq!(
            parse_inline("[unclosed](https://x.y"),
            vec![text("[unclosed](https://x.y")]
        );
        assert_eq!(parse_inline("[just brackets]"), vec![text("[just brackets]")]);
    }

    #[test]
    fn link_markup_does_not_span_lines() {
        assert_eq!(
            parse_inline("[label\n](https://x.y)"),
            vec![text("[label\n](https://x.y)")]
        );
    }

    #[test]
    fn multibyte_text_around_links() {
        assert_eq!(
            parse_inline("çok [güzel](/ğ) ü"),
            vec![text("çok "), link("güzel", "/ğ"), text(" ü")]
        );
    }
}
