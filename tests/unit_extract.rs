// Unit tests for editor text extraction.
//
// Exercises the fallback chain through MemorySurface: line nodes, the
// content blob, the legacy widget, and the two failure kinds. No HTML
// parsing here; see unit_html_surface.rs for that.

use resume_wizard::cv::extract::{extract, ExtractionFailure, LINE_SEPARATOR};
use resume_wizard::surface::memory::{EditorView, MemorySurface};

// ============================================================
// Line nodes
// ============================================================

#[test]
fn lines_are_joined_with_one_separator() {
    let surface = MemorySurface::with_lines([
        r"\documentclass{moderncv}",
        r"\begin{document}",
        r"\end{document}",
    ]);
    let result = extract(&surface);
    assert!(result.found);
    assert_eq!(
        result.text,
        [
            r"\documentclass{moderncv}",
            r"\begin{document}",
            r"\end{document}"
        ]
        .join(LINE_SEPARATOR)
    );
    assert!(result.failure.is_none());
}

#[test]
fn single_line_has_no_separator() {
    let result = extract(&MemorySurface::with_lines([r"\section{Skills}"]));
    assert!(result.found);
    assert_eq!(result.text, r"\section{Skills}");
}

#[test]
fn blank_lines_in_the_middle_are_kept() {
    let result = extract(&MemorySurface::with_lines(["a", "", "", "b"]));
    assert_eq!(result.text, "a\n\n\nb");
}

#[test]
fn trailing_whitespace_is_trimmed_but_indentation_kept() {
    let result = extract(&MemorySurface::with_lines(["  \\item one", "", "   "]));
    assert!(result.found);
    assert_eq!(result.text, "  \\item one");
}

#[test]
fn lines_win_over_blob() {
    let surface = MemorySurface {
        editor: Some(EditorView {
            lines: vec!["from lines".to_string()],
            blob: Some("from blob".to_string()),
        }),
        legacy: Some("from legacy".to_string()),
    };
    assert_eq!(extract(&surface).text, "from lines");
}

// ============================================================
// Content blob fallback
// ============================================================

#[test]
fn blob_used_when_there_are_no_lines() {
    let result = extract(&MemorySurface::with_blob("\\section{Education}\nBSc\n"));
    assert!(result.found);
    assert_eq!(result.text, "\\section{Education}\nBSc");
}

#[test]
fn blob_used_when_every_line_is_blank() {
    let surface = MemorySurface {
        editor: Some(EditorView {
            lines: vec!["".to_string(), "  ".to_string()],
            blob: Some("real content".to_string()),
        }),
        legacy: None,
    };
    assert_eq!(extract(&surface).text, "real content");
}

#[test]
fn legacy_is_ignored_when_a_primary_editor_exists() {
    let surface = MemorySurface {
        editor: Some(EditorView::default()),
        legacy: Some(r"\documentclass{res}".to_string()),
    };
    let result = extract(&surface);
    assert!(!result.found);
    assert_eq!(result.failure, Some(ExtractionFailure::EmptyContent));
}

// ============================================================
// Legacy widget
// ============================================================

#[test]
fn legacy_used_when_there_is_no_primary_editor() {
    let result = extract(&MemorySurface::with_legacy("\\documentclass{res}\n\n"));
    assert!(result.found);
    assert_eq!(result.text, r"\documentclass{res}");
}

// ============================================================
// Failures
// ============================================================

#[test]
fn no_structure_is_no_surface_found() {
    let result = extract(&MemorySurface::empty());
    assert!(!result.found);
    assert_eq!(result.text, "");
    assert_eq!(result.failure, Some(ExtractionFailure::NoSurfaceFound));
}

#[test]
fn whitespace_only_lines_are_empty_content() {
    let result = extract(&MemorySurface::with_lines([" ", "\t", ""]));
    assert!(!result.found);
    assert_eq!(result.text, "");
    assert_eq!(result.failure, Some(ExtractionFailure::EmptyContent));
}

#[test]
fn whitespace_only_blob_is_empty_content() {
    let result = extract(&MemorySurface::with_blob("\n\n   \n"));
    assert!(!result.found);
    assert_eq!(result.failure, Some(ExtractionFailure::EmptyContent));
}

#[test]
fn whitespace_only_legacy_is_empty_content() {
    let result = extract(&MemorySurface::with_legacy("   "));
    assert!(!result.found);
    assert_eq!(result.failure, Some(ExtractionFailure::EmptyContent));
}

#[test]
fn failure_messages_are_readable() {
    assert_eq!(
        ExtractionFailure::NoSurfaceFound.to_string(),
        "no editor found on the page"
    );
    assert_eq!(
        ExtractionFailure::EmptyContent.to_string(),
        "the editor content is empty"
    );
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn extraction_is_idempotent() {
    let surface = MemorySurface::from_text("\\documentclass{article}\n\n\\section{Experience}\n");
    let first = extract(&surface);
    let second = extract(&surface);
    assert_eq!(first, second);
}

#[test]
fn from_text_round_trips_through_extraction() {
    let source = "\\documentclass{moderncv}\n\\begin{document}\n  \\cvitem{a}{b}\n\\end{document}";
    let result = extract(&MemorySurface::from_text(source));
    assert_eq!(result.text, source);
}

#[test]
fn result_serializes_without_failure_when_found() {
    let result = extract(&MemorySurface::with_lines(["x"]));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["text"], "x");
    assert!(json.get("failure").is_none());
}
