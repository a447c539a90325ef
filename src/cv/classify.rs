// CV classification — OR over the heuristic table.

use serde::Serialize;
use tracing::debug;

use super::heuristics::{Heuristic, HEURISTICS};

/// Whether a document looks like a CV. Advisory only: callers may always
/// proceed regardless of the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_cv: bool,
}

/// Classify `text`. Empty or whitespace-only text is never a CV.
pub fn classify(text: &str) -> ClassificationResult {
    if text.trim().is_empty() {
        return ClassificationResult::default();
    }
    let is_cv = HEURISTICS.iter().any(|h| (h.test)(text));
    debug!(is_cv, chars = text.len(), "Classified editor content");
    ClassificationResult { is_cv }
}

/// Every heuristic that matches `text`, in table order.
pub fn matching_heuristics(text: &str) -> Vec<&'static Heuristic> {
    HEURISTICS.iter().filter(|h| (h.test)(text)).collect()
}
