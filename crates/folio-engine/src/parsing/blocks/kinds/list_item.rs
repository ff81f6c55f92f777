/// `- item` lines. Consecutive items form one list.
pub struct ListItem;

impl ListItem {
    pub const MARKER: char = '-';

    /// Returns the trimmed item text when `line` starts with `-` and whitespace.
    pub fn parse(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKER)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_space() {
        assert_eq!(ListItem::parse("- item"), Some("item"));
        assert_eq!(ListItem::parse("-\tindented  "), Some("indented"));
    }

    #[test]
    fn not_list_items() {
        assert_eq!(ListItem::parse("-item"), None);
        assert_eq!(ListItem::parse("--- rule"), None);
        assert_eq!(ListItem::parse("* star"), None);
        assert_eq!(ListItem::parse("-"), None);
    }
}
