// HTML preview of a converted CV.
//
// The LaTeX is shown verbatim inside <pre>, escaped so nothing in it can be
// interpreted as markup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// File name of the written preview page.
pub const PREVIEW_FILENAME: &str = "converted_cv_preview.html";

/// Escape LaTeX source for safe display inside HTML.
pub fn escape_for_html(latex: &str) -> String {
    html_escape::encode_safe(latex).into_owned()
}

/// A standalone HTML page showing `latex` as preformatted text.
pub fn render_preview_html(latex: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Preview Converted CV</title>\n\
         </head>\n\
         <body>\n\
         <h3>Preview Converted CV</h3>\n\
         <pre>{}</pre>\n\
         </body>\n\
         </html>\n",
        escape_for_html(latex)
    )
}

/// Write the preview page into `dir`, creating it if needed.
pub fn write_preview(dir: &Path, latex: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create preview directory {}", dir.display()))?;
    let path = dir.join(PREVIEW_FILENAME);
    std::fs::write(&path, render_preview_html(latex))
        .with_context(|| format!("Failed to write preview to {}", path.display()))?;
    info!(path = %path.display(), "Wrote preview");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        let escaped = escape_for_html(r#"<b>Tom & "Jerry" 's</b>"#);
        assert!(escaped.contains("&lt;b&gt;"));
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&quot;Jerry&quot;"));
        assert!(!escaped.contains('\''));
        assert!(!escaped.contains('<'));
    }

    #[test]
    fn plain_latex_is_unchanged() {
        let latex = r"\section{Education} \textbf{MSc}";
        assert_eq!(escape_for_html(latex), latex);
    }

    #[test]
    fn preview_page_wraps_escaped_source() {
        let page = render_preview_html(r"\verb|<tag>|");
        assert!(page.contains(r"<pre>\verb|&lt;tag&gt;|</pre>"));
    }

    #[test]
    fn write_preview_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("previews");
        let path = write_preview(&nested, "x & y").unwrap();
        assert_eq!(path, nested.join(PREVIEW_FILENAME));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("x &amp; y"));
    }
}
