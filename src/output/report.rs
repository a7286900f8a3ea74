//! Screening report assembly

use crate::interview::Priority;
use crate::processing::ScreeningOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full report for one screened candidate: a short summary, the complete
/// pipeline outcome, and generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Executive summary for quick triage
    pub summary: ScreeningSummary,

    /// Complete pipeline output (profile, match, interview plan)
    pub outcome: ScreeningOutcome,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningSummary {
    /// Match score scaled to 0-100
    pub score_percentage: u8,

    /// Screening priority copied from the interview plan
    pub priority: Priority,

    /// One-line verdict
    pub verdict: String,

    pub matched_count: usize,
    pub missing_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the screener used
    pub screener_version: String,

    /// Resume file screened
    pub resume_file: String,

    /// Requirements file screened against
    pub requirements_file: String,

    /// Total processing time
    pub processing_time_ms: u64,
}

impl ScreeningReport {
    pub fn new(
        outcome: ScreeningOutcome,
        resume_file: &str,
        requirements_file: &str,
        processing_time_ms: u64,
    ) -> Self {
        let summary = Self::create_summary(&outcome);

        let metadata = ReportMetadata {
            generated_at: Utc::now(),
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.to_string(),
            requirements_file: requirements_file.to_string(),
            processing_time_ms,
        };

        Self {
            summary,
            outcome,
            metadata,
        }
    }

    fn create_summary(outcome: &ScreeningOutcome) -> ScreeningSummary {
        let score_percentage = (outcome.match_result.score * 100.0) as u8;

        let verdict = match score_percentage {
            80..=100 => "Strong match - fast-track this candidate".to_string(),
            60..=79 => "Good match - interview with attention to the gaps".to_string(),
            40..=59 => "Partial match - weigh training investment".to_string(),
            _ => "Weak match - better suited to a junior or training track".to_string(),
        };

        ScreeningSummary {
            score_percentage,
            priority: outcome.interview_plan.priority.priority,
            verdict,
            matched_count: outcome.match_result.matched_skills.len(),
            missing_count: outcome.match_result.missing_skills.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::ScreeningEngine;

    fn outcome_with_score(requirements: &str, resume: &str) -> ScreeningOutcome {
        let mut engine = ScreeningEngine::with_seed(&Config::default(), 11).unwrap();
        engine.update_requirements(requirements);
        engine.screen(resume)
    }

    #[test]
    fn test_summary_tiers_follow_score() {
        let strong = outcome_with_score("python, react, sql", "Jane Doe\npython, react, sql");
        let report = ScreeningReport::new(strong, "resume.txt", "job.txt", 5);
        assert_eq!(report.summary.score_percentage, 100);
        assert_eq!(report.summary.priority, Priority::High);
        assert!(report.summary.verdict.starts_with("Strong match"));

        let weak = outcome_with_score("kubernetes and terraform", "Jane Doe\nVisual Basic macros");
        let report = ScreeningReport::new(weak, "resume.txt", "job.txt", 5);
        assert!(report.summary.score_percentage < 40);
        assert_eq!(report.summary.priority, Priority::Low);
    }

    #[test]
    fn test_metadata_carries_version_and_paths() {
        let outcome = outcome_with_score("python", "Jane Doe\npython");
        let report = ScreeningReport::new(outcome, "cv.pdf", "role.txt", 42);

        assert_eq!(report.metadata.screener_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.metadata.resume_file, "cv.pdf");
        assert_eq!(report.metadata.requirements_file, "role.txt");
        assert_eq!(report.metadata.processing_time_ms, 42);
    }
}
