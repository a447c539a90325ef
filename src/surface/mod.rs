// Editor surfaces — read-only views over an online editor's current text.
//
// The host editor's DOM belongs to someone else and changes between versions.
// Everything downstream reads it through the TextSurface capability, so the
// extraction fallback chain never touches concrete selectors.

pub mod html;
pub mod memory;
pub mod traits;
