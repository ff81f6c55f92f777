use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// `@youtube(url)` directives and their embeddable form.
pub struct Video;

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@youtube\((.*)\)$").expect("youtube pattern compiles"));

impl Video {
    pub const EMBED_BASE: &'static str = "https://www.youtube.com/embed/";

    /// Returns the raw argument if `line` is a youtube directive.
    pub fn directive(line: &str) -> Option<&str> {
        DIRECTIVE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Converts a short link, watch page or embed path into an embed url.
    pub fn embed_url(raw: &str) -> Option<String> {
        let url = Url::parse(raw).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let host = url.host_str()?.trim_start_matches("www.");

        let id = match host {
            "youtu.be" => url.path_segments()?.next().map(str::to_string),
            "youtube.com" | "m.youtube.com" | "youtube-nocookie.com" => {
                let mut segments = url.path_segments()?;
                match segments.next() {
                    Some("watch") => url
                        .query_pairs()
                        .find(|(key, _)| key == "v")
                        .map(|(_, value)| value.into_owned()),
                    Some("embed") | Some("shorts") => segments.next().map(str::to_string),
                    _ => None,
                }
            }
            _ => None,
        }?;

        is_video_id(&id).then(|| format!("{}{id}", Self::EMBED_BASE))
    }
}

fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
