// Data models — the persisted slots and their rows.
//
// Kept apart from the queries so other modules can name slots without
// depending on rusqlite directly.

use serde::Serialize;

/// A well-known persistence slot. Each holds at most one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    /// LaTeX source extracted from the editor.
    CvLatex,
    /// Template identifier (URL) chosen by the user.
    SelectedTemplate,
    /// Output of the last successful conversion.
    ConvertedLatex,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::CvLatex, Slot::SelectedTemplate, Slot::ConvertedLatex];

    /// Storage key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            Slot::CvLatex => "cv_latex",
            Slot::SelectedTemplate => "selected_template_url",
            Slot::ConvertedLatex => "converted_latex",
        }
    }

    /// Human-readable label for status output.
    pub fn label(self) -> &'static str {
        match self {
            Slot::CvLatex => "Extracted CV",
            Slot::SelectedTemplate => "Template",
            Slot::ConvertedLatex => "Converted CV",
        }
    }
}

/// A stored slot value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotEntry {
    pub slot: Slot,
    pub value: String,
    pub updated_at: String,
}
