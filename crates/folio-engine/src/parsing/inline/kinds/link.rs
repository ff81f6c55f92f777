/// Markdown-style `[label](href)` links.
///
/// Only targets on the allow-list become links; anything else stays literal
/// so authored content cannot produce dead or script links.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';

    const ALLOWED_SCHEMES: [&'static str; 3] = ["http://", "https://", "mailto:"];

    /// Absolute http(s), `mailto:`, or a root-relative path.
    pub fn is_allowed(href: &str) -> bool {
        if href.starts_with('/') {
            // `//host/...` is protocol-relative, not root-relative
            return !href.starts_with("//");
        }
        let lower = href.to_ascii_lowercase();
        Self::ALLOWED_SCHEMES
            .iter()
            .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
    }
}
