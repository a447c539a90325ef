use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use resume_wizard::convert::client::ConversionClient;
use resume_wizard::db;
use resume_wizard::db::models::Slot;
use resume_wizard::db::queries;
use resume_wizard::output::{download, preview, terminal};
use resume_wizard::pipeline::inspect::{spawn_inspector, SnapshotFile, DEFAULT_INSPECT_TIMEOUT};
use resume_wizard::pipeline::workflow;

mod config;

/// Resume Wizard: move a LaTeX CV to a new template.
///
/// Reads the CV from a saved copy of your online editor page, checks that
/// it looks like a CV, and sends it to a conversion service.
#[derive(Parser)]
#[command(name = "resume-wizard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Check whether a saved editor page (or .tex file) contains a CV
    Check {
        /// Saved editor page (.html) or LaTeX source (.tex)
        snapshot: PathBuf,

        /// Print the inspection as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Seconds to wait for the editor content (default: 5)
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Extract the CV from a saved editor page and store it
    Extract {
        /// Saved editor page (.html) or LaTeX source (.tex)
        snapshot: PathBuf,

        /// Seconds to wait for the editor content (default: 5)
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Choose the template to convert into
    Template {
        /// Template URL, or the key of a popular template
        template: Option<String>,

        /// List the popular templates
        #[arg(long)]
        list: bool,
    },

    /// Convert the stored CV into the selected template
    Convert {
        /// Use this template (URL or key) instead of the stored selection
        #[arg(long)]
        template: Option<String>,
    },

    /// Show the converted CV
    Preview {
        /// Write an HTML preview page instead of printing to the terminal
        #[arg(long)]
        html: bool,
    },

    /// Save the converted CV as converted_cv.tex
    Download {
        /// Directory to save into (default: RESUME_WIZARD_OUTPUT_DIR or your downloads folder)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show how to apply the converted CV to your document
    Apply,

    /// Show what is currently stored
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resume_wizard=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing Resume Wizard database...");
            let config = config::Config::load()?;
            let conn = db::initialize(&config.db_path)?;
            let table_count = db::schema::table_count(&conn)?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext step: save your editor page (Ctrl+S) and run:");
            println!("  resume-wizard extract <saved-page.html>");
        }

        Commands::Check {
            snapshot,
            json,
            timeout,
        } => {
            let source = SnapshotFile::new(snapshot);
            println!("Checking {} for CV content...", source.path().display());

            let inspector = spawn_inspector(source);
            let inspection = inspector.inspect(inspect_timeout(timeout)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            } else {
                terminal::display_inspection(&inspection);
            }
        }

        Commands::Extract { snapshot, timeout } => {
            let config = config::Config::load()?;
            let conn = db::initialize(&config.db_path)?;

            let source = SnapshotFile::new(snapshot);
            println!("Extracting CV data from {}...", source.path().display());

            let inspector = spawn_inspector(source);
            let inspection = inspector.inspect(inspect_timeout(timeout)).await?;

            if !workflow::store_extraction(&conn, &inspection)? {
                let reason = inspection
                    .extraction
                    .failure
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "no content".to_string());
                anyhow::bail!(
                    "Error extracting CV data: {reason}.\n\
                     Save the editor page again once it has finished loading, then retry."
                );
            }

            terminal::display_inspection(&inspection);
            println!();
            terminal::display_extraction_stored(&inspection);
        }

        Commands::Template { template, list } => {
            let config = config::Config::load()?;
            let conn = db::initialize(&config.db_path)?;

            match template {
                Some(input) if !list => {
                    let url = workflow::select_template(&conn, &input)?;
                    println!("{} {url}", "Template selected:".green().bold());
                    if queries::get_slot(&conn, Slot::CvLatex)?.is_none() {
                        println!(
                            "{}",
                            "CV data is missing. Please extract first.".yellow()
                        );
                    } else {
                        println!("Ready to convert! Run `resume-wizard convert`.");
                    }
                }
                _ => {
                    let selected = queries::get_slot(&conn, Slot::SelectedTemplate)?;
                    terminal::display_templates(selected.as_deref());
                }
            }
        }

        Commands::Convert { template } => {
            let config = config::Config::load()?;
            config.require_converter()?;
            let conn = db::open(&config.db_path)?;

            let client = ConversionClient::new(&config.converter_url, config.request_timeout)?;
            info!(endpoint = client.endpoint(), "Using conversion service");

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
            spinner.set_message("Converting CV to new template...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = workflow::convert_stored(&conn, &client, template.as_deref()).await;
            spinner.finish_and_clear();

            let converted = result?;
            terminal::display_conversion_success(&converted);
        }

        Commands::Preview { html } => {
            let config = config::Config::load()?;
            let conn = db::open(&config.db_path)?;
            let converted = workflow::load_converted(&conn)?;

            if html {
                let path = preview::write_preview(&config.output_dir, &converted)?;
                println!("{} {}", "Preview written to:".bold(), path.display());
            } else {
                terminal::display_converted_source(&converted);
            }
        }

        Commands::Download { dir } => {
            let config = config::Config::load()?;
            let conn = db::open(&config.db_path)?;
            let converted = workflow::load_converted(&conn)?;

            let dir = dir.unwrap_or(config.output_dir);
            let path = download::save_tex(&dir, &converted)?;
            println!("{} {}", "Saved:".green().bold(), path.display());
        }

        Commands::Apply => {
            let config = config::Config::load()?;
            let conn = db::open(&config.db_path)?;
            // Only useful once there is something to apply
            workflow::load_converted(&conn)?;

            let hint = format!(
                "`resume-wizard download` saves to {}",
                config.output_dir.join(download::DOWNLOAD_FILENAME).display()
            );
            terminal::display_manual_apply(&hint);
        }

        Commands::Status => {
            let config = config::Config::load()?;
            resume_wizard::status::show(&config.db_path)?;
        }
    }

    Ok(())
}

fn inspect_timeout(secs: Option<u64>) -> Duration {
    secs.map(Duration::from_secs)
        .unwrap_or(DEFAULT_INSPECT_TIMEOUT)
}
