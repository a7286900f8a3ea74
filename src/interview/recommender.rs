//! Interview plan generation from a profile and a match result

use crate::interview::questions;
use crate::processing::matcher::MatchResult;
use crate::processing::profile::{CandidateProfile, ExperienceLevel};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Fixed interview format descriptor selected by score tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewFormat {
    pub name: String,
    pub duration: String,
    pub stages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::MediumHigh => "Medium-High",
            Priority::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// Screening priority with static rationale text keyed only by tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityRecommendation {
    pub priority: Priority,
    pub recommendation: String,
    pub focus_areas: Vec<String>,
    pub red_flags: String,
}

/// Complete interview plan for one candidate.
///
/// Fully derived from the profile and match result; carries its inputs so
/// downstream display needs no further lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewPlan {
    pub format: InterviewFormat,
    pub technical_questions: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub follow_up_questions: Vec<String>,
    pub priority: PriorityRecommendation,
    pub experience_level: ExperienceLevel,
    pub match_score: f64,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub generated_at: DateTime<Utc>,
}

/// Builds interview plans with randomized question selection.
///
/// Question draws are sampled without replacement per pool. The pool set is
/// deterministic for a given skill list; the drawn questions are not unless
/// the recommender is seeded.
pub struct InterviewRecommender {
    rng: StdRng,
}

impl Default for InterviewRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewRecommender {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant with reproducible question draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn recommend(
        &mut self,
        profile: &CandidateProfile,
        match_result: &MatchResult,
    ) -> InterviewPlan {
        let experience_level = ExperienceLevel::classify(&profile.experience, &profile.skills);

        let format = format_for_score(match_result.score);
        let technical_questions = self.technical_questions(&profile.skills);
        let behavioral_questions = self.behavioral_questions(experience_level);
        let follow_up_questions = follow_up_questions(&match_result.missing_skills);
        let priority = priority_for_score(match_result.score);

        InterviewPlan {
            format,
            technical_questions,
            behavioral_questions,
            follow_up_questions,
            priority,
            experience_level,
            match_score: match_result.score,
            matched_skills: match_result.matched_skills.clone(),
            missing_skills: match_result.missing_skills.clone(),
            generated_at: Utc::now(),
        }
    }

    /// Two questions per skill from that skill's pool, two general
    /// problem-solving questions, truncated to five overall.
    fn technical_questions(&mut self, skills: &[String]) -> Vec<String> {
        let mut selected = Vec::new();

        for skill in skills {
            if let Some(pool) = technical_pool_for(skill) {
                selected.extend(
                    pool.choose_multiple(&mut self.rng, 2)
                        .map(|question| question.to_string()),
                );
            }
        }

        selected.extend(
            questions::PROBLEM_SOLVING_QUESTIONS
                .choose_multiple(&mut self.rng, 2)
                .map(|question| question.to_string()),
        );

        selected.truncate(5);
        selected
    }

    fn behavioral_questions(&mut self, experience_level: ExperienceLevel) -> Vec<String> {
        let count = match experience_level {
            ExperienceLevel::Senior => 4,
            ExperienceLevel::Mid => 3,
            ExperienceLevel::Junior => 2,
        };

        questions::BEHAVIORAL_QUESTIONS
            .choose_multiple(&mut self.rng, count)
            .map(|question| question.to_string())
            .collect()
    }
}

/// One prompt per missing skill that maps to a known follow-up family,
/// truncated to three.
fn follow_up_questions(missing_skills: &BTreeSet<String>) -> Vec<String> {
    let mut follow_ups = Vec::new();

    for skill in missing_skills {
        if let Some(prompt) = follow_up_for(skill) {
            follow_ups.push(prompt.to_string());
        }
    }

    follow_ups.truncate(3);
    follow_ups
}

fn technical_pool_for(skill: &str) -> Option<&'static [&'static str]> {
    let skill_lower = skill.to_lowercase();

    if skill_lower.contains("python") {
        Some(questions::PYTHON_QUESTIONS)
    } else if skill_lower.contains("javascript") || skill_lower.contains("js") {
        Some(questions::JAVASCRIPT_QUESTIONS)
    } else if skill_lower.contains("java") {
        Some(questions::JAVA_QUESTIONS)
    } else if ["html", "css", "react", "angular", "vue"]
        .iter()
        .any(|tech| skill_lower.contains(tech))
    {
        Some(questions::WEB_DEVELOPMENT_QUESTIONS)
    } else if ["mysql", "postgresql", "mongodb", "redis", "oracle"]
        .iter()
        .any(|db| skill_lower.contains(db))
    {
        Some(questions::DATABASE_QUESTIONS)
    } else if ["aws", "azure", "docker", "kubernetes"]
        .iter()
        .any(|cloud| skill_lower.contains(cloud))
    {
        Some(questions::CLOUD_QUESTIONS)
    } else {
        None
    }
}

fn follow_up_for(skill: &str) -> Option<&'static str> {
    let skill_lower = skill.to_lowercase();

    if skill_lower.contains("python") {
        Some(questions::PYTHON_FOLLOW_UP)
    } else if skill_lower.contains("javascript") || skill_lower.contains("js") {
        Some(questions::JAVASCRIPT_FOLLOW_UP)
    } else if skill_lower.contains("react") {
        Some(questions::REACT_FOLLOW_UP)
    } else if skill_lower.contains("aws") || skill_lower.contains("azure") {
        Some(questions::CLOUD_FOLLOW_UP)
    } else if skill_lower.contains("docker") {
        Some(questions::DOCKER_FOLLOW_UP)
    } else if skill_lower.contains("agile") || skill_lower.contains("scrum") {
        Some(questions::AGILE_FOLLOW_UP)
    } else if skill_lower.contains("leadership") {
        Some(questions::LEADERSHIP_FOLLOW_UP)
    } else if skill_lower.contains("communication") {
        Some(questions::COMMUNICATION_FOLLOW_UP)
    } else {
        None
    }
}

fn format_for_score(score: f64) -> InterviewFormat {
    if score >= 0.7 {
        InterviewFormat {
            name: "Comprehensive Technical + Behavioral".to_string(),
            duration: "2-3 hours".to_string(),
            stages: vec![
                "Technical screening (1 hour)".to_string(),
                "System design discussion (45 minutes)".to_string(),
                "Behavioral interview (45 minutes)".to_string(),
                "Team fit discussion (30 minutes)".to_string(),
            ],
        }
    } else if score >= 0.4 {
        InterviewFormat {
            name: "Technical Assessment + Behavioral".to_string(),
            duration: "1.5-2 hours".to_string(),
            stages: vec![
                "Technical assessment (1 hour)".to_string(),
                "Behavioral interview (45 minutes)".to_string(),
                "Skills gap discussion (15 minutes)".to_string(),
            ],
        }
    } else {
        InterviewFormat {
            name: "Skills Assessment + Learning Potential".to_string(),
            duration: "1-1.5 hours".to_string(),
            stages: vec![
                "Basic technical assessment (45 minutes)".to_string(),
                "Learning ability discussion (30 minutes)".to_string(),
                "Growth potential evaluation (15 minutes)".to_string(),
            ],
        }
    }
}

fn priority_for_score(score: f64) -> PriorityRecommendation {
    if score >= 0.8 {
        PriorityRecommendation {
            priority: Priority::High,
            recommendation: "Strong candidate - recommend immediate interview".to_string(),
            focus_areas: vec![
                "Technical depth".to_string(),
                "System design".to_string(),
                "Leadership potential".to_string(),
            ],
            red_flags: "Watch for overconfidence or lack of teamwork".to_string(),
        }
    } else if score >= 0.6 {
        PriorityRecommendation {
            priority: Priority::MediumHigh,
            recommendation: "Good candidate - recommend interview with focus on gaps".to_string(),
            focus_areas: vec![
                "Technical skills".to_string(),
                "Learning ability".to_string(),
                "Cultural fit".to_string(),
            ],
            red_flags: "Assess willingness to learn missing skills".to_string(),
        }
    } else if score >= 0.4 {
        PriorityRecommendation {
            priority: Priority::Medium,
            recommendation: "Potential candidate - consider if willing to train".to_string(),
            focus_areas: vec![
                "Learning potential".to_string(),
                "Basic skills".to_string(),
                "Motivation".to_string(),
            ],
            red_flags: "Evaluate training investment vs. potential".to_string(),
        }
    } else {
        PriorityRecommendation {
            priority: Priority::Low,
            recommendation: "Consider for junior role or training program".to_string(),
            focus_areas: vec![
                "Learning ability".to_string(),
                "Motivation".to_string(),
                "Cultural fit".to_string(),
            ],
            red_flags: "May require significant training investment".to_string(),
        }
    }
}
