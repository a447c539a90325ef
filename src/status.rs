// System status display — shows the database and what each slot holds.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::db;
use crate::db::models::{Slot, SlotEntry};
use crate::db::queries;
use crate::output::{first_line, truncate_chars};

/// Display system status to the terminal.
pub fn show(db_path: &str) -> Result<()> {
    if !Path::new(db_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `resume-wizard init` to set up the database.");
        return Ok(());
    }
    let conn = db::open(db_path)?;

    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);

    let entries = queries::get_all_slots(&conn)?;
    for entry in &entries {
        println!(
            "{}: {} {}",
            entry.slot.label(),
            slot_summary(entry),
            format!("(updated {})", entry.updated_at).dimmed()
        );
    }

    for slot in missing_slots(&entries) {
        println!("{}: {}", slot.label(), "none".dimmed());
        println!("  {}", next_step_hint(slot).dimmed());
    }

    Ok(())
}

fn slot_summary(entry: &SlotEntry) -> String {
    match entry.slot {
        Slot::SelectedTemplate => entry.value.clone(),
        _ => format!(
            "{} lines, starts with {}",
            entry.value.lines().count(),
            truncate_chars(first_line(&entry.value), 48)
        ),
    }
}

/// Slots with no stored value, in display order.
fn missing_slots(entries: &[SlotEntry]) -> Vec<Slot> {
    Slot::ALL
        .into_iter()
        .filter(|slot| !entries.iter().any(|e| e.slot == *slot))
        .collect()
}

fn next_step_hint(slot: Slot) -> &'static str {
    match slot {
        Slot::CvLatex => "Run `resume-wizard extract <snapshot>` to extract your CV",
        Slot::SelectedTemplate => "Run `resume-wizard template --list` to pick a template",
        Slot::ConvertedLatex => "Run `resume-wizard convert` once a CV and template are set",
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
