// Download — save a converted CV as a .tex file under a fixed name.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// File name every downloaded CV is saved under.
pub const DOWNLOAD_FILENAME: &str = "converted_cv.tex";

/// The user's downloads folder, or `./output` when the platform has none.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("output"))
}

/// Write `latex` to `dir/converted_cv.tex`, replacing any previous download.
pub fn save_tex(dir: &Path, latex: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory {}", dir.display()))?;
    let path = dir.join(DOWNLOAD_FILENAME);
    std::fs::write(&path, latex)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = latex.len(), "Saved converted CV");
    Ok(path)
}
