use relative_path::{RelativePath, RelativePathBuf};

use crate::io::IoError;

/// Proof of a fetch started by [`CodeLoader::request`].
///
/// Carries the generation it was issued in; results for older generations
/// are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub path: RelativePathBuf,
}

/// What the viewer has to do to get its code text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeRequest {
    /// Inline code is present; show it, fetch nothing.
    Inline,
    /// Fetch this path and hand the result to [`CodeLoader::complete`].
    Fetch(FetchTicket),
    /// No code source at all.
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// The fetch failed; the text shown before stays.
    Failed,
    /// The viewer moved on to another source; the result was discarded.
    Stale,
}

/// Lazily fetched code text for one viewer, guarded by a generation counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeLoader {
    generation: u64,
    fetched: Option<String>,
}

impl CodeLoader {
    /// Starts a new load for the given sources, invalidating any in-flight fetch.
    pub fn request(&mut self, inline: Option<&str>, code_path: Option<&RelativePath>) -> CodeRequest {
        self.generation += 1;
        self.fetched = None;

        if inline.is_some_and(|code| !code.trim().is_empty()) {
            return CodeRequest::Inline;
        }
        match code_path {
            Some(path) => CodeRequest::Fetch(FetchTicket {
                generation: self.generation,
                path: path.to_relative_path_buf(),
            }),
            None => CodeRequest::Nothing,
        }
    }

    /// Applies a fetch result if its ticket is still current.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<String, IoError>) -> LoadOutcome {
        if ticket.generation != self.generation {
            log::debug!("discarding stale code fetch for {}", ticket.path);
            return LoadOutcome::Stale;
        }
        match result {
            Ok(code) => {
                self.fetched = Some(code);
                LoadOutcome::Applied
            }
            Err(e) => {
                log::warn!("failed to load code from {}: {e}", ticket.path);
                LoadOutcome::Failed
            }
        }
    }

    /// The text to render: non-blank inline code, else the fetched text, else nothing.
    pub fn display_text<'a>(&'a self, inline: Option<&'a str>) -> &'a str {
        match inline {
            Some(code) if !code.trim().is_empty() => code,
            _ => self.fetched.as_deref().unwrap_or(""),
        }
    }
}
