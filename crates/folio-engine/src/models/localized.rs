use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language used when the requested one has no translation.
pub const FALLBACK_LANGUAGE: &str = "en";

/// A content string that is either plain or translated per language code.
///
/// In JSON this is either `"text"` or `{ "en": "text", "tr": "metin" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Resolves the string for `lang`.
    ///
    /// Falls back to [`FALLBACK_LANGUAGE`], then to the first translation in
    /// key order, then to the empty string.
    pub fn resolve(&self, lang: &str) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Localized(map) => map
                .get(lang)
                .or_else(|| map.get(FALLBACK_LANGUAGE))
                .or_else(|| map.values().next())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translated() -> LocalizedText {
        serde_json::from_str(r#"{ "tr": "Merhaba", "en": "Hello", "de": "Hallo" }"#).unwrap()
    }

    #[test]
    fn plain_text_ignores_language() {
        let text: LocalizedText = serde_json::from_str(r#""Hello""#).unwrap();
        assert_eq!(text.resolve("tr"), "Hello");
    }

    #[test]
    fn resolves_requested_language() {
        assert_eq!(translated().resolve("tr"), "Merhaba");
    }

    #[test]
    fn falls_back_to_english() {
        assert_eq!(translated().resolve("fr"), "Hello");
    }

    #[test]
    fn falls_back_to_first_entry_without_english() {
        let text: LocalizedText =
            serde_json::from_str(r#"{ "tr": "Merhaba", "de": "Hallo" }"#).unwrap();
        assert_eq!(text.resolve("fr"), "Hallo");
    }

    #[test]
    fn empty_map_resolves_to_empty_string() {
        let text = LocalizedText::Localized(BTreeMap::new());
        assert_eq!(text.resolve("en"), "");
    }
}
