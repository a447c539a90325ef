// HTML snapshot surface — reads a saved copy of the editor page.
//
// The primary shape is a CodeMirror 6 view: a `.cm-editor` container whose
// `.cm-content` node holds one `.cm-line` element per rendered line. Older
// editor pages embed a CodeMirror 5 widget inside an iframe instead; page
// snapshot tools inline that iframe's document as its `srcdoc` attribute.
//
// CodeMirror 6 only renders lines near the viewport, so a snapshot of a long
// document may be missing lines that were scrolled far out of view.

use std::path::Path;

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use super::traits::TextSurface;
use crate::cv::extract::join_lines;

/// Primary editor container.
pub const EDITOR_SELECTOR: &str = ".cm-editor";
/// Line-sized text nodes inside the container.
pub const LINE_SELECTOR: &str = ".cm-line";
/// Content node used when no line nodes are present.
pub const CONTENT_SELECTOR: &str = ".cm-content";
/// Embedded document hosting the legacy editor.
pub const LEGACY_FRAME_SELECTOR: &str = "iframe#editor-iframe";
/// Legacy editor widget inside the embedded document.
pub const LEGACY_WIDGET_SELECTOR: &str = ".CodeMirror";
/// Rendered line rows of the legacy widget.
pub const LEGACY_LINE_SELECTOR: &str = ".CodeMirror-code .CodeMirror-line";
/// Input field of the legacy widget, read only when no line rows have text.
pub const LEGACY_VALUE_SELECTOR: &str = "textarea";

/// CodeMirror 5 fills empty lines with a zero-width space.
const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Elements that start a new line when rendered as text.
const BLOCK_ELEMENTS: &[&str] = &["div", "p", "pre", "li", "section"];

/// A parsed editor page.
///
/// `scraper::Html` is not `Send`; parse and read a snapshot on the same
/// thread (the inspect worker does exactly that).
pub struct HtmlSurface {
    document: Html,
}

impl HtmlSurface {
    /// Parse a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Read and parse a saved page from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read editor snapshot {}", path.display()))?;
        debug!(path = %path.display(), bytes = html.len(), "Loaded editor snapshot");
        Ok(Self::parse(&html))
    }

    fn editor(&self) -> Option<ElementRef<'_>> {
        let sel = Selector::parse(EDITOR_SELECTOR).ok()?;
        self.document.select(&sel).next()
    }
}

impl TextSurface for HtmlSurface {
    fn has_editor(&self) -> bool {
        self.editor().is_some()
    }

    fn read_lines(&self) -> Option<Vec<String>> {
        let editor = self.editor()?;
        let sel = Selector::parse(LINE_SELECTOR).ok()?;
        let lines: Vec<String> = editor
            .select(&sel)
            .map(|line| line.text().collect::<String>())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines)
        }
    }

    fn read_blob(&self) -> Option<String> {
        let editor = self.editor()?;
        let sel = Selector::parse(CONTENT_SELECTOR).ok()?;
        let content = editor.select(&sel).next()?;
        Some(rendered_text(content))
    }

    fn read_legacy(&self) -> Option<String> {
        let frame_sel = Selector::parse(LEGACY_FRAME_SELECTOR).ok()?;
        let frame = self.document.select(&frame_sel).next()?;
        let Some(srcdoc) = frame.value().attr("srcdoc") else {
            debug!("Legacy editor frame has no inlined document");
            return None;
        };

        let inner = Html::parse_document(srcdoc);
        let widget_sel = Selector::parse(LEGACY_WIDGET_SELECTOR).ok()?;
        let widget = inner.select(&widget_sel).next()?;

        let line_sel = Selector::parse(LEGACY_LINE_SELECTOR).ok()?;
        let lines: Vec<String> = widget
            .select(&line_sel)
            .map(|line| {
                line.text()
                    .collect::<String>()
                    .replace(ZERO_WIDTH_SPACE, "")
            })
            .collect();
        let joined = join_lines(&lines);
        if !joined.trim().is_empty() {
            debug!(lines = lines.len(), "Using legacy editor line rows");
            return Some(joined);
        }

        let value_sel = Selector::parse(LEGACY_VALUE_SELECTOR).ok()?;
        match widget.select(&value_sel).next() {
            Some(value) => Some(value.text().collect()),
            // No text anywhere in the widget.
            None => Some(joined),
        }
    }
}

/// Approximate an element's rendered text: block children and `<br>` start
/// new lines, inline children run together.
fn rendered_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_rendered(element, &mut out);
    out
}

fn push_rendered(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                match el.name() {
                    "br" => out.push('\n'),
                    name if BLOCK_ELEMENTS.contains(&name) => {
                        if !out.is_empty() && !out.ends_with('\n') {
                            out.push('\n');
                        }
                        push_rendered(child_ref, out);
                        if !out.ends_with('\n') {
                            out.push('\n');
                        }
                    }
                    _ => push_rendered(child_ref, out),
                }
            }
            _ => {}
        }
    }
}
