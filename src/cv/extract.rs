// Editor text extraction — an ordered fallback chain over a TextSurface.
//
// Strategies run from most structurally faithful to least:
//   1. line nodes of the primary container, joined with '\n'
//   2. the container's content node as one blob
//   3. the legacy widget in an embedded document (only when there is no
//      primary container at all)
// A missing container is ordinary control flow. Only total failure is
// reported, and it is reported as a value, never as an error.

use serde::Serialize;
use tracing::{debug, warn};

use crate::surface::traits::TextSurface;

/// Separator inserted between consecutive editor lines.
pub const LINE_SEPARATOR: &str = "\n";

/// Why an extraction came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExtractionFailure {
    /// No recognized editor structure exists on the surface.
    NoSurfaceFound,
    /// An editor was found but its text is empty after trimming.
    EmptyContent,
}

impl std::fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSurfaceFound => write!(f, "no editor found on the page"),
            Self::EmptyContent => write!(f, "the editor content is empty"),
        }
    }
}

/// Outcome of one extraction. `found == false` implies `text` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub found: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ExtractionFailure>,
}

impl ExtractionResult {
    fn found(text: String) -> Self {
        Self {
            found: true,
            text,
            failure: None,
        }
    }

    fn missing(failure: ExtractionFailure) -> Self {
        Self {
            found: false,
            text: String::new(),
            failure: Some(failure),
        }
    }
}

/// Recover the full plain text of the editor view behind `surface`.
///
/// Returned text has trailing whitespace removed; leading indentation of the
/// first line is kept. Calling this twice on an unchanged surface yields
/// byte-identical text.
pub fn extract(surface: &dyn TextSurface) -> ExtractionResult {
    let raw = match read_raw(surface) {
        Some(raw) => raw,
        None => {
            warn!("Could not find an editor on the page");
            return ExtractionResult::missing(ExtractionFailure::NoSurfaceFound);
        }
    };

    if raw.trim().is_empty() {
        warn!("Editor found but its content is empty");
        return ExtractionResult::missing(ExtractionFailure::EmptyContent);
    }

    let text = raw.trim_end().to_string();
    debug!(chars = text.len(), "Extracted editor content");
    ExtractionResult::found(text)
}

/// Walk the fallback chain. `None` means no editor structure at all; an
/// editor that yields nothing usable comes back as `Some("")`.
fn read_raw(surface: &dyn TextSurface) -> Option<String> {
    if !surface.has_editor() {
        debug!("No primary editor container, trying legacy editor");
        return surface.read_legacy();
    }

    if let Some(lines) = surface.read_lines() {
        let joined = join_lines(&lines);
        if !joined.trim().is_empty() {
            debug!(lines = lines.len(), "Using editor line nodes");
            return Some(joined);
        }
        debug!(lines = lines.len(), "Editor line nodes are blank");
    }

    match surface.read_blob() {
        Some(blob) => {
            debug!(chars = blob.len(), "Using editor content node");
            Some(blob)
        }
        None => Some(String::new()),
    }
}

/// Join line texts with exactly one separator between neighbours, dropping a
/// single trailing separator left by an empty last line.
pub fn join_lines(lines: &[String]) -> String {
    let mut joined = lines.join(LINE_SEPARATOR);
    if joined.ends_with(LINE_SEPARATOR) {
        joined.pop();
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn join_lines_single_line_has_no_separator() {
        assert_eq!(join_lines(&lines(&["only"])), "only");
    }

    #[test]
    fn join_lines_keeps_blank_lines_in_the_middle() {
        assert_eq!(join_lines(&lines(&["a", "", "b"])), "a\n\nb");
    }

    #[test]
    fn join_lines_drops_one_trailing_separator() {
        assert_eq!(join_lines(&lines(&["a", ""])), "a");
        assert_eq!(join_lines(&lines(&["a", "", ""])), "a\n");
    }
}
