//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Resume extensions accepted at the CLI boundary
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "doc"];

/// Requirements-document extensions accepted at the CLI boundary
pub const REQUIREMENTS_EXTENSIONS: &[&str] = &["txt", "md", "pdf", "docx", "doc"];

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Automated resume screening and interview planning tool")]
#[command(
    long_about = "Screen candidate resumes against job requirements: extract a candidate profile, score skill alignment, and generate a tailored interview plan"
)]
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
    /// Screen one resume against a job requirements document
    Screen {
        /// Path to resume file (PDF, DOCX, TXT, DOC)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job requirements file (TXT, MD, PDF, DOCX, DOC)
        #[arg(short = 'j', long)]
        requirements: PathBuf,

        /// Output detailed report with candidate background
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Seed for reproducible interview question selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Screen every resume in a directory and rank the candidates
    Batch {
        /// Directory containing resume files
        #[arg(short, long)]
        resume_dir: PathBuf,

        /// Path to job requirements file (TXT, MD, PDF, DOCX, DOC)
        #[arg(short = 'j', long)]
        requirements: PathBuf,

        /// Output format for the ranked summary: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the ranked summary to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Seed for reproducible interview question selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show configuration
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
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension against an allow list
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format_accepts_known_names() {
        assert!(matches!(
            parse_output_format("console"),
            Ok(OutputFormat::Console)
        ));
        assert!(matches!(parse_output_format("JSON"), Ok(OutputFormat::Json)));
        assert!(matches!(
            parse_output_format("md"),
            Ok(OutputFormat::Markdown)
        ));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension_policies() {
        assert!(validate_file_extension(&PathBuf::from("cv.pdf"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.DOCX"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.md"), RESUME_EXTENSIONS).is_err());
        assert!(
            validate_file_extension(&PathBuf::from("role.md"), REQUIREMENTS_EXTENSIONS).is_ok()
        );
        assert!(validate_file_extension(&PathBuf::from("role"), REQUIREMENTS_EXTENSIONS).is_err());
    }
}
