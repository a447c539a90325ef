// In-memory surface — a TextSurface built directly from strings.
//
// Used by tests and by callers that already hold editor text in some other
// shape (e.g. a plain .tex file) but still want it to go through the same
// extraction rules as a scraped page.

use super::traits::TextSurface;

/// The primary editor container of a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorView {
    pub lines: Vec<String>,
    pub blob: Option<String>,
}

/// A surface whose structure is spelled out field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub editor: Option<EditorView>,
    pub legacy: Option<String>,
}

impl MemorySurface {
    /// A surface with no recognizable editor structure at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A primary editor container rendering the given lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            editor: Some(EditorView {
                lines: lines.into_iter().map(Into::into).collect(),
                blob: None,
            }),
            legacy: None,
        }
    }

    /// A primary editor container with no line nodes, only a content node.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            editor: Some(EditorView {
                lines: Vec::new(),
                blob: Some(blob.into()),
            }),
            legacy: None,
        }
    }

    /// No primary container; an embedded legacy widget holding `value`.
    pub fn with_legacy(value: impl Into<String>) -> Self {
        Self {
            editor: None,
            legacy: Some(value.into()),
        }
    }

    /// Split plain text into editor lines, the way the editor would render it.
    pub fn from_text(text: &str) -> Self {
        Self::with_lines(text.lines())
    }
}

impl TextSurface for MemorySurface {
    fn has_editor(&self) -> bool {
        self.editor.is_some()
    }

    fn read_lines(&self) -> Option<Vec<String>> {
        self.editor
            .as_ref()
            .filter(|e| !e.lines.is_empty())
            .map(|e| e.lines.clone())
    }

    fn read_blob(&self) -> Option<String> {
        self.editor.as_ref().and_then(|e| e.blob.clone())
    }

    fn read_legacy(&self) -> Option<String> {
        self.legacy.clone()
    }
}
