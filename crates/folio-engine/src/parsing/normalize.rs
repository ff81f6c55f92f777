/// Rewrites every newline form to a single `\n`.
///
/// Handles real `\r\n` and `\r` as well as the literal two-character escapes
/// `\r\n`, `\n` and `\r` that show up in double-encoded JSON. Idempotent.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\r\\n", "\n")
        .replace("\r\n", "\n")
        .replace("\\n", "\n")
        .replace("\\r", "\n")
        .replace('\r', "\n")
}
