//! CLI interface for the ATS resume engine

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Job descriptions are read as documents
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf"];
/// Resumes are structured records
pub const RESUME_EXTENSIONS: &[&str] = &["json", "toml"];

#[derive(Parser)]
#[command(name = "ats-resume")]
#[command(about = "Resume keyword extraction, summary generation and ATS scoring")]
#[command(long_about = "Extract keywords from job descriptions, generate professional summaries from structured resumes and score resumes for applicant tracking system compatibility")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract keywords from a job description
    Keywords {
        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,
    },

    /// Generate a professional summary for a resume
    Summary {
        /// Path to resume record (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description to extract keywords from first
        #[arg(short, long)]
        job: Option<PathBuf>,
    },

    /// Score a resume for ATS compatibility
    Score {
        /// Path to resume record (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description file; overrides the one stored in the record
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Show the generated summary and every keyword
        #[arg(short, long)]
        detailed: bool,

        /// Write the updated record (keywords and summary) to this file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Also write the rendered report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
