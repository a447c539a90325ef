use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default timeout for a single conversion request.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Only the
/// conversion endpoint has no default, and only `convert` needs it.
pub struct Config {
    /// Endpoint of the remote template conversion service (CONVERTER_URL).
    pub converter_url: String,
    pub db_path: String,
    /// Where previews and downloaded .tex files are written.
    pub output_dir: PathBuf,
    /// Per-request timeout for the conversion service.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let request_timeout = match env::var("RESUME_WIZARD_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("RESUME_WIZARD_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let output_dir = env::var("RESUME_WIZARD_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| resume_wizard::output::download::default_download_dir());

        Ok(Self {
            converter_url: env::var("CONVERTER_URL").unwrap_or_default(),
            db_path: env::var("RESUME_WIZARD_DB_PATH")
                .unwrap_or_else(|_| "./resume-wizard.db".to_string()),
            output_dir,
            request_timeout,
        })
    }

    /// Check that the conversion endpoint is configured.
    /// Call this before any operation that talks to the conversion service.
    pub fn require_converter(&self) -> Result<()> {
        if self.converter_url.is_empty() {
            anyhow::bail!(
                "CONVERTER_URL not set. Add it to your .env file.\n\
                 It should point at the template conversion service endpoint."
            );
        }
        Ok(())
    }
}
