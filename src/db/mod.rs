// Slot storage — one small SQLite file holding the three values the workflow
// passes between commands: the extracted CV, the chosen template URL and the
// last converted document.
//
// Commands that produce a value (`extract`, `template`) create the file on
// demand; commands that only consume one (`convert`, `preview`, `download`,
// `apply`) refuse to run without it, so a typo in RESUME_WIZARD_DB_PATH
// surfaces as "not found" instead of an empty new file.

pub mod models;
pub mod queries;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Create the slot store if needed and bring its tables up to date.
pub fn initialize(db_path: &str) -> Result<Connection> {
    let path = Path::new(db_path);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| {
            format!("Failed to create directory {} for the slot store", dir.display())
        })?;
    }

    let conn = connect(path)?;
    schema::create_tables(&conn)?;
    Ok(conn)
}

/// Open a slot store that `init`, `extract` or `template` already created.
pub fn open(db_path: &str) -> Result<Connection> {
    let path = Path::new(db_path);
    if !path.exists() {
        anyhow::bail!(
            "No stored CV data at {db_path}. Run `resume-wizard extract <snapshot>` \
             (or `resume-wizard init`) first."
        );
    }
    connect(path)
}

fn connect(path: &Path) -> Result<Connection> {
    Connection::open(path)
        .with_context(|| format!("Failed to open slot store at {}", path.display()))
}
