//! Output formatting for screening reports
//!
//! Three renderers share one trait: colored console output for terminals,
//! JSON for downstream tooling, and markdown for sharing with hiring teams.

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::interview::Priority;
use crate::output::report::ScreeningReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    include_interview_plan: bool,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            detailed: false,
            include_interview_plan: true,
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, include_interview_plan: bool) -> Self {
        Self {
            use_colors,
            detailed,
            include_interview_plan,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn colorize_bold(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let decorated = match level {
            1 => format!("█▓▒░ {} ░▒▓█", title),
            2 => format!("▓▒░ {}", title),
            3 => format!("▒░ {}", title),
            _ => format!("░ {}", title),
        };

        let styled = match level {
            1 => self.colorize_bold(&decorated, Color::Blue),
            2 => self.colorize_bold(&decorated, Color::Green),
            3 => self.colorize_bold(&decorated, Color::Yellow),
            _ => self.colorize_bold(&decorated, Color::White),
        };

        match level {
            1 => format!("{}\n{}", styled, "=".repeat(60)),
            2 => format!("{}\n{}", styled, "-".repeat(40)),
            _ => styled,
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("🏆 STRONG", Color::Green),
            70..=79 => ("🎉 PROMISING", Color::BrightGreen),
            60..=69 => ("👍 FAIR", Color::Yellow),
            40..=59 => ("⚠️ PARTIAL", Color::BrightYellow),
            _ => ("❌ WEAK", Color::Red),
        };
        self.colorize_bold(&format!("[{}]", badge), color)
    }

    fn priority_icon(&self, priority: Priority) -> &'static str {
        if self.use_colors {
            match priority {
                Priority::High => "⭐",
                Priority::MediumHigh => "✅",
                Priority::Medium => "📋",
                Priority::Low => "💡",
            }
        } else {
            match priority {
                Priority::High => "[!]",
                Priority::MediumHigh => "[*]",
                Priority::Medium => "[-]",
                Priority::Low => "[+]",
            }
        }
    }

    fn priority_color(priority: Priority) -> Color {
        match priority {
            Priority::High => Color::Green,
            Priority::MediumHigh => Color::BrightGreen,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Red,
        }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();
        let profile = &report.outcome.profile;
        let match_result = &report.outcome.match_result;
        let plan = &report.outcome.interview_plan;

        output.push_str(&self.format_header("📄 RESUME SCREENING REPORT", 1));
        output.push_str("\n\n");

        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));
        output.push_str(&format!(
            "Resume: {} | Requirements: {}\n\n",
            report.metadata.resume_file, report.metadata.requirements_file
        ));

        output.push_str(&self.format_header("👤 Candidate", 2));
        output.push('\n');
        output.push_str(&format!("Name:  {}\n", profile.name));
        output.push_str(&format!("Email: {}\n", field_or_missing(&profile.email)));
        output.push_str(&format!("Phone: {}\n", field_or_missing(&profile.phone)));
        output.push_str(&format!("Experience level: {}\n", profile.experience_level));
        output.push_str(&format!("Skills extracted: {}\n\n", profile.skills.len()));

        output.push_str(&self.format_header("🎯 Match", 2));
        output.push('\n');
        output.push_str(&format!(
            "Overall Score: {} {}\n",
            self.colorize_bold(&format!("{}%", report.summary.score_percentage), Color::Cyan),
            self.format_score_badge(report.summary.score_percentage)
        ));
        output.push_str(&format!(
            "{}\n\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));

        let priority = report.summary.priority;
        output.push_str(&format!(
            "Priority: {} {} - {}\n\n",
            self.priority_icon(priority),
            self.colorize_bold(&priority.to_string(), Self::priority_color(priority)),
            plan.priority.recommendation
        ));

        if match_result.matched_skills.is_empty() {
            output.push_str("Matched skills: none\n");
        } else {
            let matched: Vec<&str> = match_result
                .matched_skills
                .iter()
                .map(|s| s.as_str())
                .collect();
            output.push_str(&format!(
                "Matched skills ({}): {}\n",
                matched.len(),
                self.colorize(&matched.join(", "), Color::Green)
            ));
        }

        if match_result.missing_skills.is_empty() {
            output.push_str("Missing skills: none\n");
        } else {
            let missing: Vec<&str> = match_result
                .missing_skills
                .iter()
                .map(|s| s.as_str())
                .collect();
            output.push_str(&format!(
                "Missing skills ({}): {}\n",
                missing.len(),
                self.colorize(&missing.join(", "), Color::Red)
            ));
        }

        if !report.outcome.gap_hints.is_empty() {
            output.push_str("\nClose calls:\n");
            for hint in &report.outcome.gap_hints {
                output.push_str(&self.colorize(
                    &format!(
                        "  {} is close to candidate skill '{}'\n",
                        hint.missing_skill, hint.closest_candidate_skill
                    ),
                    Color::BrightBlack,
                ));
            }
        }
        output.push('\n');

        if self.include_interview_plan {
            output.push_str(&self.format_header("🗓️ Interview Plan", 2));
            output.push('\n');
            output.push_str(&format!(
                "Format: {} ({})\n",
                self.colorize_bold(&plan.format.name, Color::Cyan),
                plan.format.duration
            ));
            output.push_str("Stages:\n");
            for (i, stage) in plan.format.stages.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, stage));
            }
            output.push('\n');

            output.push_str(&self.format_header("Technical questions", 3));
            output.push('\n');
            for question in &plan.technical_questions {
                output.push_str(&format!("  • {}\n", question));
            }
            output.push('\n');

            output.push_str(&self.format_header("Behavioral questions", 3));
            output.push('\n');
            for question in &plan.behavioral_questions {
                output.push_str(&format!("  • {}\n", question));
            }
            output.push('\n');

            if !plan.follow_up_questions.is_empty() {
                output.push_str(&self.format_header("Follow-up questions", 3));
                output.push('\n');
                for question in &plan.follow_up_questions {
                    output.push_str(&format!("  • {}\n", question));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "Focus areas: {}\n",
                plan.priority.focus_areas.join(", ")
            ));
            output.push_str(&format!("Red flags: {}\n\n", plan.priority.red_flags));
        }

        if self.detailed {
            output.push_str(&self.format_header("📚 Background", 2));
            output.push('\n');

            if profile.skills.is_empty() {
                output.push_str("Skills: none extracted\n");
            } else {
                output.push_str(&format!("Skills: {}\n", profile.skills.join(", ")));
            }

            if !profile.education.is_empty() {
                output.push_str("Education:\n");
                for entry in &profile.education {
                    output.push_str(&format!("  • {}\n", entry));
                }
            }

            if !profile.experience.is_empty() {
                output.push_str("Experience:\n");
                for entry in &profile.experience {
                    output.push_str(&format!("  • {}\n", entry));
                }
            }
            output.push('\n');
        }

        output.push_str(&self.colorize(
            &format!(
                "ℹ️  Generated by resume-screener v{}",
                report.metadata.screener_version
            ),
            Color::BrightBlack,
        ));
        output.push('\n');

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
    include_interview_plan: bool,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self {
            include_metadata: true,
            include_interview_plan: true,
        }
    }

    pub fn with_options(include_metadata: bool, include_interview_plan: bool) -> Self {
        Self {
            include_metadata,
            include_interview_plan,
        }
    }

    fn score_emoji(score: u8) -> &'static str {
        match score {
            80..=100 => "🏆",
            70..=79 => "🎉",
            60..=69 => "👍",
            40..=59 => "⚠️",
            _ => "❌",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();
        let profile = &report.outcome.profile;
        let match_result = &report.outcome.match_result;
        let plan = &report.outcome.interview_plan;

        output.push_str("# 📄 Resume Screening Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {}  \n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            output.push_str(&format!(
                "**Resume:** {} | **Requirements:** {}  \n",
                report.metadata.resume_file, report.metadata.requirements_file
            ));
            output.push_str(&format!(
                "**Processing time:** {}ms\n\n",
                report.metadata.processing_time_ms
            ));
        }

        output.push_str("## 👤 Candidate\n\n");
        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        output.push_str(&format!("| Name | {} |\n", profile.name));
        output.push_str(&format!("| Email | {} |\n", field_or_missing(&profile.email)));
        output.push_str(&format!("| Phone | {} |\n", field_or_missing(&profile.phone)));
        output.push_str(&format!(
            "| Experience level | {} |\n",
            profile.experience_level
        ));
        output.push_str(&format!("| Skills extracted | {} |\n\n", profile.skills.len()));

        output.push_str("## 🎯 Match Summary\n\n");
        output.push_str(&format!(
            "**Overall score: {}%** {}\n\n",
            report.summary.score_percentage,
            Self::score_emoji(report.summary.score_percentage)
        ));
        output.push_str(&format!("> {}\n\n", report.summary.verdict));
        output.push_str(&format!(
            "**Priority:** {} - {}\n\n",
            report.summary.priority, plan.priority.recommendation
        ));

        output.push_str(&format!(
            "### ✅ Matched skills ({})\n\n",
            match_result.matched_skills.len()
        ));
        if match_result.matched_skills.is_empty() {
            output.push_str("*None*\n\n");
        } else {
            for skill in &match_result.matched_skills {
                output.push_str(&format!("- `{}`\n", skill));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "### ❌ Missing skills ({})\n\n",
            match_result.missing_skills.len()
        ));
        if match_result.missing_skills.is_empty() {
            output.push_str("*None*\n\n");
        } else {
            for skill in &match_result.missing_skills {
                output.push_str(&format!("- `{}`\n", skill));
            }
            output.push('\n');
        }

        if !report.outcome.gap_hints.is_empty() {
            output.push_str("### 🔍 Close calls\n\n");
            for hint in &report.outcome.gap_hints {
                output.push_str(&format!(
                    "- `{}` is close to candidate skill `{}`\n",
                    hint.missing_skill, hint.closest_candidate_skill
                ));
            }
            output.push('\n');
        }

        if self.include_interview_plan {
            output.push_str("## 🗓️ Interview Plan\n\n");
            output.push_str(&format!(
                "**Format:** {} ({})\n\n",
                plan.format.name, plan.format.duration
            ));
            output.push_str("**Stages:**\n\n");
            for (i, stage) in plan.format.stages.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, stage));
            }
            output.push('\n');

            output.push_str("### Technical questions\n\n");
            for question in &plan.technical_questions {
                output.push_str(&format!("- {}\n", question));
            }
            output.push('\n');

            output.push_str("### Behavioral questions\n\n");
            for question in &plan.behavioral_questions {
                output.push_str(&format!("- {}\n", question));
            }
            output.push('\n');

            if !plan.follow_up_questions.is_empty() {
                output.push_str("### Follow-up questions\n\n");
                for question in &plan.follow_up_questions {
                    output.push_str(&format!("- {}\n", question));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "**Focus areas:** {}  \n",
                plan.priority.focus_areas.join(", ")
            ));
            output.push_str(&format!("**Red flags:** {}\n\n", plan.priority.red_flags));
        }

        output.push_str("---\n");
        output.push_str(&format!(
            "*Generated by resume-screener v{}*\n",
            report.metadata.screener_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(),
            json_formatter: JsonFormatter::new(),
            markdown_formatter: MarkdownFormatter::new(),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, include_interview_plan: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::with_options(
                use_colors,
                detailed,
                include_interview_plan,
            ),
            json_formatter: JsonFormatter::new(),
            markdown_formatter: MarkdownFormatter::with_options(true, include_interview_plan),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(
            config.color_output,
            config.detailed,
            config.include_interview_plan,
        )
    }

    /// Generate a report in the specified format
    pub fn generate_report(
        &self,
        report: &ScreeningReport,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    /// Generate a detailed console report regardless of configured verbosity
    pub fn generate_detailed_console(&self, report: &ScreeningReport) -> Result<String> {
        let formatter =
            ConsoleFormatter::with_options(self.console_formatter.use_colors, true, true);
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn field_or_missing(value: &str) -> &str {
    if value.is_empty() {
        "(not found)"
    } else {
        value
    }
}

/// Save report content to a file, creating parent directories as needed
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Suggest a filename for the report based on format and resume name
pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base = Path::new(resume_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    if timestamp {
        let now = chrono::Local::now();
        format!(
            "{}_screening_{}.{}",
            base,
            now.format("%Y%m%d_%H%M%S"),
            extension
        )
    } else {
        format!("{}_screening.{}", base, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::ScreeningEngine;

    fn sample_report() -> ScreeningReport {
        let mut engine = ScreeningEngine::with_seed(&Config::default(), 3).unwrap();
        engine.update_requirements("We need Python and React experience, plus Docker.");
        let outcome = engine.screen(
            "Jane Doe\njane@example.com\n\nBuilt Python services and React frontends.\n",
        );
        ScreeningReport::new(outcome, "jane_doe.txt", "backend_role.txt", 12)
    }

    #[test]
    fn test_console_format_plain_contains_key_sections() {
        let report = sample_report();
        let formatter = ConsoleFormatter::with_options(false, false, true);
        let text = formatter.format_report(&report).unwrap();

        assert!(text.contains("RESUME SCREENING REPORT"));
        assert!(text.contains("Overall Score:"));
        assert!(text.contains("python"));
        assert!(text.contains("docker"));
        assert!(text.contains("Interview Plan"));
        assert!(text.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_console_detailed_adds_background() {
        let report = sample_report();
        let base = ConsoleFormatter::with_options(false, false, true)
            .format_report(&report)
            .unwrap();
        let detailed = ConsoleFormatter::with_options(false, true, true)
            .format_report(&report)
            .unwrap();

        assert!(!base.contains("Background"));
        assert!(detailed.contains("Background"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = sample_report();
        let json = JsonFormatter::new().format_report(&report).unwrap();
        let parsed: ScreeningReport = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.summary.score_percentage,
            report.summary.score_percentage
        );
        assert_eq!(
            parsed.outcome.match_result.matched_skills,
            report.outcome.match_result.matched_skills
        );
    }

    #[test]
    fn test_markdown_format_has_tables_and_lists() {
        let report = sample_report();
        let markdown = MarkdownFormatter::new().format_report(&report).unwrap();

        assert!(markdown.starts_with("# 📄 Resume Screening Report"));
        assert!(markdown.contains("| Field | Value |"));
        assert!(markdown.contains("### ✅ Matched skills"));
        assert!(markdown.contains("- `python`"));
    }

    #[test]
    fn test_report_generator_dispatches_all_formats() {
        let report = sample_report();
        let generator = ReportGenerator::with_options(false, false, true);

        for format in [
            OutputFormat::Console,
            OutputFormat::Json,
            OutputFormat::Markdown,
        ] {
            let rendered = generator.generate_report(&report, format).unwrap();
            assert!(!rendered.is_empty());
        }
    }

    #[test]
    fn test_suggest_filename_variants() {
        assert_eq!(
            suggest_filename(OutputFormat::Json, "candidates/jane_doe.pdf", false),
            "jane_doe_screening.json"
        );
        assert_eq!(
            suggest_filename(OutputFormat::Markdown, "resume.txt", false),
            "resume_screening.md"
        );

        let stamped = suggest_filename(OutputFormat::Console, "resume.txt", true);
        assert!(stamped.starts_with("resume_screening_"));
        assert!(stamped.ends_with(".txt"));
    }
}
