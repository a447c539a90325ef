// Colored terminal output for inspections, templates and conversion results.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here so they stay focused on control flow.

use colored::Colorize;

use crate::cv::classify::matching_heuristics;
use crate::cv::extract::ExtractionFailure;
use crate::cv::Inspection;
use crate::templates::POPULAR_TEMPLATES;

/// Display the outcome of inspecting an editor snapshot.
pub fn display_inspection(inspection: &Inspection) {
    let extraction = &inspection.extraction;

    if !extraction.found {
        let reason = extraction
            .failure
            .unwrap_or(ExtractionFailure::NoSurfaceFound);
        println!(
            "{} Could not read document content ({reason}).",
            "Error:".red().bold()
        );
        println!(
            "  {}",
            "Save the editor page again once it has finished loading, then retry.".dimmed()
        );
        return;
    }

    let line_count = extraction.text.lines().count();
    println!(
        "  Content: {} lines, {} characters",
        line_count,
        extraction.text.chars().count()
    );
    println!(
        "  First line: {}",
        super::truncate_chars(super::first_line(&extraction.text), 80).dimmed()
    );

    if inspection.classification.is_cv {
        println!("\n{}", "CV document detected!".green().bold());
        for hit in matching_heuristics(&extraction.text) {
            println!("  {} {}", hit.name, format!("({})", hit.description).dimmed());
        }
    } else {
        println!(
            "\n{}",
            "This doesn't appear to be a CV document. You can extract it anyway.".yellow()
        );
    }
}

/// Confirm that extracted text was stored.
pub fn display_extraction_stored(inspection: &Inspection) {
    println!("{}", "CV data extracted successfully!".green().bold());
    if !inspection.classification.is_cv {
        println!(
            "  {}",
            "Stored anyway, although it doesn't look like a CV.".yellow()
        );
    }
    println!("\nNext: pick a template with `resume-wizard template <url-or-key>`");
}

/// List the built-in templates.
pub fn display_templates(selected: Option<&str>) {
    println!("\n{}", "=== Popular Templates ===".bold());
    for template in POPULAR_TEMPLATES {
        let marker = if selected == Some(template.url) {
            "*".green().bold().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "  {} {:<18} {:<18} {}",
            marker,
            template.key,
            template.name,
            template.url.dimmed()
        );
    }
    println!(
        "\n  {}",
        "Any other http(s) template URL works too.".dimmed()
    );
}

/// Show what to do after a successful conversion.
pub fn display_conversion_success(converted: &str) {
    println!("\n{}", "Conversion successful!".green().bold());
    println!(
        "  Converted CV: {} lines, {} characters",
        converted.lines().count(),
        converted.chars().count()
    );
    println!("\nWhat would you like to do with the converted CV?");
    println!("  resume-wizard preview    show the converted source");
    println!("  resume-wizard download   save it as a .tex file");
    println!("  resume-wizard apply      instructions for applying it to your document");
}

/// Print the converted source to the terminal.
pub fn display_converted_source(converted: &str) {
    println!("{}", "=== Preview Converted CV ===".bold());
    println!();
    println!("{converted}");
}

/// Explain how to apply the converted CV by hand. The tool never edits the
/// online document itself.
pub fn display_manual_apply(download_hint: &str) {
    println!("{}", "=== Apply to Document (Manual) ===".bold());
    println!();
    println!("To apply the conversion, copy the converted code into your document:");
    println!("  1. Run `resume-wizard preview` or `resume-wizard download`.");
    println!("  2. Open your project in the online editor.");
    println!("  3. Replace the document's contents with the converted code.");
    println!();
    println!(
        "{}",
        "To start a fresh project instead, create a new blank project and paste the code there."
            .dimmed()
    );
    println!("  {}", download_hint.dimmed());
}
