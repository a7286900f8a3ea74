//! Resume screener: automated resume screening and interview planning tool

mod cli;
mod config;
mod error;
mod input;
mod interview;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeScreenerError};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use interview::Priority;
use log::{error, info, warn};
use output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use output::report::ScreeningReport;
use processing::engine::ScreeningEngine;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            resume,
            requirements,
            detailed,
            output,
            save,
            seed,
        } => {
            screen_command(
                &config,
                &resume,
                &requirements,
                detailed,
                output.as_deref(),
                save.as_deref(),
                seed,
            )
            .await?;
        }

        Commands::Batch {
            resume_dir,
            requirements,
            output,
            save,
            seed,
        } => {
            batch_command(
                &config,
                &resume_dir,
                &requirements,
                output.as_deref(),
                save.as_deref(),
                seed,
            )
            .await?;
        }

        Commands::Config { action } => {
            config_command(&config, action)?;
        }
    }

    Ok(())
}

async fn screen_command(
    config: &Config,
    resume: &Path,
    requirements: &Path,
    detailed: bool,
    output: Option<&str>,
    save: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    info!("Starting resume screening");

    // Validate input files
    cli::validate_file_extension(resume, cli::RESUME_EXTENSIONS)
        .map_err(|e| ResumeScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

    cli::validate_file_extension(requirements, cli::REQUIREMENTS_EXTENSIONS)
        .map_err(|e| ResumeScreenerError::InvalidInput(format!("Requirements file: {}", e)))?;

    let output_format = resolve_output_format(config, output)?;

    println!("🚀 Resume screening");
    println!("📄 Resume: {}", resume.display());
    println!("💼 Requirements: {}", requirements.display());
    println!("🔧 Output format: {:?}", output_format);

    if detailed {
        println!("📊 Detailed report enabled");
    }

    let start = Instant::now();

    println!("\n📂 Extracting text from files...");
    let mut input_manager = InputManager::from_config(&config.input);

    let requirements_text = input_manager.extract_text(requirements).await?;
    let resume_text = extract_resume_or_default(&mut input_manager, resume).await?;

    if detailed && !resume_text.is_empty() {
        println!("\n📄 Resume content preview:");
        println!("{}", truncate_text(&resume_text, 300));
    }

    println!("\n🔍 Screening candidate...");
    let mut engine = build_engine(config, seed)?;
    engine.update_requirements(&requirements_text);

    let outcome = engine.screen(&resume_text);
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let report = ScreeningReport::new(
        outcome,
        &resume.display().to_string(),
        &requirements.display().to_string(),
        elapsed_ms,
    );

    let generator = ReportGenerator::with_options(
        config.output.color_output,
        detailed || config.output.detailed,
        config.output.include_interview_plan,
    );
    let formatted = generator.generate_report(&report, output_format.clone())?;

    match save {
        Some(save_path) => {
            let target = resolve_save_path(save_path, output_format, resume);
            save_report_to_file(&formatted, &target)?;
            println!("💾 Report saved to: {}", target.display());
        }
        None => println!("\n{}", formatted),
    }

    println!(
        "🎯 Screening complete! Match score: {:.1}%",
        report.outcome.match_result.score * 100.0
    );

    Ok(())
}

async fn batch_command(
    config: &Config,
    resume_dir: &Path,
    requirements: &Path,
    output: Option<&str>,
    save: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    info!("Starting batch screening");

    cli::validate_file_extension(requirements, cli::REQUIREMENTS_EXTENSIONS)
        .map_err(|e| ResumeScreenerError::InvalidInput(format!("Requirements file: {}", e)))?;

    if !resume_dir.is_dir() {
        return Err(ResumeScreenerError::InvalidInput(format!(
            "Not a directory: {}",
            resume_dir.display()
        )));
    }

    let output_format = resolve_output_format(config, output)?;
    let resume_files = collect_resume_files(resume_dir)?;

    if resume_files.is_empty() {
        return Err(ResumeScreenerError::InvalidInput(format!(
            "No resume files found in {}",
            resume_dir.display()
        )));
    }

    println!("🚀 Batch screening {} resumes", resume_files.len());
    println!("💼 Requirements: {}", requirements.display());

    let mut input_manager = InputManager::from_config(&config.input);
    let requirements_text = input_manager.extract_text(requirements).await?;

    let mut engine = build_engine(config, seed)?;
    engine.update_requirements(&requirements_text);

    let progress = ProgressBar::new(resume_files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid progress template")
            .progress_chars("#>-"),
    );

    let mut rows = Vec::with_capacity(resume_files.len());
    for file in &resume_files {
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();
        progress.set_message(file_name.clone());

        let resume_text = extract_resume_or_default(&mut input_manager, file).await?;
        let outcome = engine.screen(&resume_text);

        let candidate = if outcome.profile.name == "Unknown" {
            stem_of(file)
        } else {
            outcome.profile.name.clone()
        };

        rows.push(BatchRow {
            rank: 0,
            candidate,
            file: file_name,
            score: outcome.match_result.score,
            priority: outcome.interview_plan.priority.priority,
            matched: outcome.match_result.matched_skills.len(),
            missing: outcome.match_result.missing_skills.len(),
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    rows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.file.cmp(&b.file))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }

    let summary = render_batch_summary(&rows, output_format)?;
    match save {
        Some(save_path) => {
            save_report_to_file(&summary, save_path)?;
            println!("💾 Summary saved to: {}", save_path.display());
        }
        None => println!("\n{}", summary),
    }

    println!("🎯 Batch screening complete! {} candidates ranked", rows.len());

    Ok(())
}

fn config_command(config: &Config, action: Option<ConfigAction>) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            println!("⚙️  Current Configuration\n");
            println!("Config file: {}", Config::config_path().display());
            println!("\nScoring weights:");
            println!(
                "  Exact match: {:.1}%",
                config.scoring.exact_match_weight * 100.0
            );
            println!("  Semantic:    {:.1}%", config.scoring.semantic_weight * 100.0);
            println!("  Coverage:    {:.1}%", config.scoring.coverage_weight * 100.0);
            println!("  Category:    {:.1}%", config.scoring.category_weight * 100.0);
            println!(
                "  Surplus bonus: {} per extra skill, capped at {}",
                config.scoring.surplus_skill_bonus, config.scoring.surplus_bonus_cap
            );
            println!("\nVectorizer:");
            println!("  Max features: {}", config.vectorizer.max_features);
            println!("\nInput:");
            println!(
                "  Caching: {}",
                if config.input.enable_caching {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            println!("\nOutput:");
            println!("  Format: {:?}", config.output.format);
            println!("  Detailed: {}", config.output.detailed);
            println!("  Interview plan: {}", config.output.include_interview_plan);
            println!("  Colors: {}", config.output.color_output);
        }

        Some(ConfigAction::Reset) => {
            println!("🔄 Resetting configuration to defaults...");
            Config::default().save()?;
            println!("✅ Configuration reset successfully!");
        }

        Some(ConfigAction::Path) => {
            println!("{}", Config::config_path().display());
        }
    }

    Ok(())
}

/// One line of the ranked batch summary
#[derive(Serialize)]
struct BatchRow {
    rank: usize,
    candidate: String,
    file: String,
    score: f64,
    priority: Priority,
    matched: usize,
    missing: usize,
}

fn render_batch_summary(rows: &[BatchRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),

        OutputFormat::Markdown => {
            let mut out = String::from("# Batch Screening Summary\n\n");
            out.push_str("| Rank | Candidate | File | Score | Priority | Matched | Missing |\n");
            out.push_str("|------|-----------|------|-------|----------|---------|---------|\n");
            for row in rows {
                out.push_str(&format!(
                    "| {} | {} | {} | {:.1}% | {} | {} | {} |\n",
                    row.rank,
                    row.candidate,
                    row.file,
                    row.score * 100.0,
                    row.priority,
                    row.matched,
                    row.missing
                ));
            }
            Ok(out)
        }

        OutputFormat::Console => {
            let mut out = String::new();
            out.push_str(&format!(
                "{:<5} {:<24} {:<28} {:>7} {:<12} {:>8} {:>8}\n",
                "Rank", "Candidate", "File", "Score", "Priority", "Matched", "Missing"
            ));
            out.push_str(&"-".repeat(96));
            out.push('\n');
            for row in rows {
                out.push_str(&format!(
                    "{:<5} {:<24} {:<28} {:>6.1}% {:<12} {:>8} {:>8}\n",
                    row.rank,
                    truncate_text(&row.candidate, 24),
                    truncate_text(&row.file, 28),
                    row.score * 100.0,
                    row.priority.to_string(),
                    row.matched,
                    row.missing
                ));
            }
            Ok(out)
        }
    }
}

fn build_engine(config: &Config, seed: Option<u64>) -> Result<ScreeningEngine> {
    match seed {
        Some(seed) => ScreeningEngine::with_seed(config, seed),
        None => ScreeningEngine::new(config),
    }
}

fn resolve_output_format(config: &Config, requested: Option<&str>) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(ResumeScreenerError::InvalidInput),
        None => Ok(config.output.format.clone()),
    }
}

/// Undecodable resumes fall back to an empty text, which screens as a
/// default profile instead of aborting the run.
async fn extract_resume_or_default(
    input_manager: &mut InputManager,
    resume: &Path,
) -> Result<String> {
    match input_manager.extract_text(resume).await {
        Ok(text) => Ok(text),
        Err(ResumeScreenerError::TextExtraction(msg))
        | Err(ResumeScreenerError::PdfExtraction(msg)) => {
            warn!("Could not decode {}: {}", resume.display(), msg);
            println!(
                "⚠️  Could not decode {}, screening with an empty profile",
                resume.display()
            );
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

fn collect_resume_files(resume_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(resume_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if cli::validate_file_extension(&path, cli::RESUME_EXTENSIONS).is_ok() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn resolve_save_path(save: &Path, format: OutputFormat, resume: &Path) -> PathBuf {
    if save.is_dir() {
        let resume_name = resume
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume");
        save.join(suggest_filename(format, resume_name, true))
    } else {
        save.to_path_buf()
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Truncate text to at most `max_chars` characters with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
