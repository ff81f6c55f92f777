use std::collections::HashMap;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Slug used when a heading has no ASCII letters or digits left.
pub const FALLBACK_SLUG: &str = "section";

/// Turns heading text into a URL fragment.
///
/// Lower-cases, folds dotless `ı` and diacritics to base Latin letters,
/// collapses every run of characters outside `[a-z0-9]` into one `-`, and
/// trims hyphens from both ends.
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(fold_letter)
        .collect();

    let mut slug = String::with_capacity(folded.len());
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Letters that carry no decomposable diacritic but still have a Latin base.
fn fold_letter(c: char) -> Vec<char> {
    match c {
        'ı' => vec!['i'],
        'ø' => vec!['o'],
        'ł' => vec!['l'],
        'đ' => vec!['d'],
        'ß' => vec!['s', 's'],
        'æ' => vec!['a', 'e'],
        'œ' => vec!['o', 'e'],
        other => vec![other],
    }
}

/// Hands out heading ids for one parse, disambiguating repeats.
///
/// The first heading with a given id keeps it; later ones get `-2`, `-3`, ...
#[derive(Debug, Default)]
pub struct HeadingIds {
    prefix: String,
    seen: HashMap<String, usize>,
}

impl HeadingIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim().to_string(),
            seen: HashMap::new(),
        }
    }

    pub fn next_id(&mut self, heading: &str) -> String {
        let slug = slugify(heading);
        let base = if self.prefix.is_empty() {
            slug
        } else {
            format!("{}-{slug}", self.prefix)
        };

        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        match *count {
            1 => base,
            n => format!("{base}-{n}"),
        }
    }
}
