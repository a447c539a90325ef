// Slot workflows — what the CLI does with an inspection or a conversion.
//
// These sit between the core (pure, no storage) and main.rs (argument
// parsing, printing). Each step reads or writes the well-known slots:
//   extract  -> cv_latex (cleared when nothing was found)
//   template -> selected_template_url
//   convert  -> converted_latex

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{info, warn};

use crate::convert::traits::Converter;
use crate::cv::Inspection;
use crate::db::models::Slot;
use crate::db::queries;
use crate::templates;

/// Persist an inspection's text into the CV slot. When nothing was found
/// the slot is cleared so a stale CV is never converted by accident.
///
/// Returns whether text was stored.
pub fn store_extraction(conn: &Connection, inspection: &Inspection) -> Result<bool> {
    let extraction = &inspection.extraction;
    if !extraction.found {
        queries::clear_slot(conn, Slot::CvLatex)?;
        warn!(failure = ?extraction.failure, "Extraction failed, cleared stored CV");
        return Ok(false);
    }

    queries::set_slot(conn, Slot::CvLatex, &extraction.text)?;
    info!(
        chars = extraction.text.len(),
        is_cv = inspection.classification.is_cv,
        "Stored extracted CV"
    );
    Ok(true)
}

/// Resolve a template key or URL and persist it as the selected template.
pub fn select_template(conn: &Connection, input: &str) -> Result<String> {
    let url = templates::resolve_template(input)?;
    queries::set_slot(conn, Slot::SelectedTemplate, &url)?;
    info!(template = %url, "Selected template");
    Ok(url)
}

/// Load the stored CV, or explain how to get one.
pub fn load_cv(conn: &Connection) -> Result<String> {
    match queries::get_slot(conn, Slot::CvLatex)? {
        Some(cv) if !cv.trim().is_empty() => Ok(cv),
        _ => anyhow::bail!(
            "No CV data found. Please extract first: `resume-wizard extract <snapshot>`"
        ),
    }
}

/// Load the last conversion result, or explain how to get one.
pub fn load_converted(conn: &Connection) -> Result<String> {
    match queries::get_slot(conn, Slot::ConvertedLatex)? {
        Some(latex) if !latex.is_empty() => Ok(latex),
        _ => anyhow::bail!(
            "No converted LaTeX found. Run `resume-wizard convert` first."
        ),
    }
}

/// Convert the stored CV into the chosen template and persist the result.
///
/// `template_override` (a key or URL) replaces the stored selection and is
/// saved as the new selection.
pub async fn convert_stored(
    conn: &Connection,
    converter: &dyn Converter,
    template_override: Option<&str>,
) -> Result<String> {
    let cv = load_cv(conn)?;

    let template_url = match template_override {
        Some(input) => select_template(conn, input)?,
        None => match queries::get_slot(conn, Slot::SelectedTemplate)? {
            Some(url) => url,
            None => anyhow::bail!(
                "No template selected. Choose one with \
                 `resume-wizard template <url-or-key>` or pass --template"
            ),
        },
    };

    info!(template = %template_url, latex_len = cv.len(), "Converting CV");

    let converted = converter
        .convert(&cv, &template_url)
        .await
        .context("Conversion failed")?;

    queries::set_slot(conn, Slot::ConvertedLatex, &converted)?;
    info!(chars = converted.len(), "Stored converted CV");
    Ok(converted)
}
