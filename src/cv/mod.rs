// CV core — pull LaTeX source out of an editor surface and decide whether it
// looks like a CV.
//
// Both operations are synchronous and pure: they read the surface (or text)
// once, never yield, and keep no state between calls.

pub mod classify;
pub mod extract;
pub mod heuristics;

use serde::Serialize;

use crate::surface::traits::TextSurface;
use classify::ClassificationResult;
use extract::ExtractionResult;

/// One full pass of the core: extraction, then classification of whatever
/// was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub extraction: ExtractionResult,
    pub classification: ClassificationResult,
}

/// Run `extract`, then `classify` if extraction found text.
pub fn inspect(surface: &dyn TextSurface) -> Inspection {
    let extraction = extract::extract(surface);
    let classification = if extraction.found {
        classify::classify(&extraction.text)
    } else {
        ClassificationResult::default()
    };
    Inspection {
        extraction,
        classification,
    }
}
