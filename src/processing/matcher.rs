//! Multi-signal skill matching against job requirements

use crate::config::Config;
use crate::error::Result;
use crate::processing::dictionary::SkillDictionary;
use crate::processing::normalizer::SkillNormalizer;
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::tfidf::TfidfVectorizer;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Scoring weights applied to the blended signals.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub exact_match: f64,
    pub semantic: f64,
    pub coverage: f64,
    pub category: f64,
    pub surplus_skill_bonus: f64,
    pub surplus_bonus_cap: f64,
}

/// Outcome of matching one candidate against one requirements document.
///
/// Recomputed on demand from the current requirements; never treated as the
/// source of truth for skill membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
}

/// A missing requirement paired with the candidate skill that nearly
/// matches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapHint {
    pub missing_skill: String,
    pub closest_candidate_skill: String,
}

/// Candidate skills within Jaro-Winkler distance of a missing skill are
/// surfaced as near-miss hints alongside the gap list.
const NEAR_MISS_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillCategory {
    Technical,
    SoftSkills,
    Tools,
    Languages,
    Frameworks,
    Databases,
    Cloud,
}

/// Category weights for the weighted component signal. The order matches the
/// accumulation order; three categories deliberately share the 0.9 weight.
const CATEGORY_WEIGHTS: [(SkillCategory, f64); 7] = [
    (SkillCategory::Technical, 1.0),
    (SkillCategory::SoftSkills, 0.8),
    (SkillCategory::Tools, 0.9),
    (SkillCategory::Languages, 0.7),
    (SkillCategory::Frameworks, 0.9),
    (SkillCategory::Databases, 0.8),
    (SkillCategory::Cloud, 0.9),
];

const LANGUAGE_SKILLS: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "php", "ruby", "swift", "kotlin", "go", "rust",
    "scala", "r", "matlab",
];

const FRAMEWORK_SKILLS: &[&str] = &[
    "react", "angular", "vue", "express", "django", "flask", "spring", "asp.net", "laravel",
];

const DATABASE_SKILLS: &[&str] = &[
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "oracle",
    "sql server",
    "sqlite",
    "dynamodb",
    "cassandra",
];

const CLOUD_SKILLS: &[&str] = &[
    "aws",
    "azure",
    "google cloud",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "git",
    "github",
    "gitlab",
];

const TOOL_SKILLS: &[&str] = &[
    "selenium",
    "junit",
    "pytest",
    "mocha",
    "jest",
    "cypress",
    "postman",
    "soapui",
    "figma",
    "adobe xd",
    "sketch",
    "photoshop",
    "illustrator",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
];

/// Scores candidate skill lists against free-text requirements.
///
/// Four signals are blended: exact-match F1, TF-IDF cosine similarity over
/// the joined skill documents, requirement coverage, and a category-weighted
/// F1. Candidates carrying more skills than the requirements ask for receive
/// a small capped bonus.
pub struct SkillMatcher {
    normalizer: SkillNormalizer,
    extractor: SkillExtractor,
    vectorizer: TfidfVectorizer,
    weights: ScoringWeights,
}

impl SkillMatcher {
    pub fn new(dictionary: &SkillDictionary, config: &Config) -> Result<Self> {
        Ok(Self {
            normalizer: SkillNormalizer::new(),
            extractor: SkillExtractor::new(dictionary)?,
            vectorizer: TfidfVectorizer::new(config.vectorizer.max_features),
            weights: ScoringWeights {
                exact_match: config.scoring.exact_match_weight,
                semantic: config.scoring.semantic_weight,
                coverage: config.scoring.coverage_weight,
                category: config.scoring.category_weight,
                surplus_skill_bonus: config.scoring.surplus_skill_bonus,
                surplus_bonus_cap: config.scoring.surplus_bonus_cap,
            },
        })
    }

    /// Match candidate skills against a requirements document.
    ///
    /// Requirements are run through the same extractor used for resumes so
    /// that both sides share a vocabulary. Degenerate inputs produce a low or
    /// zero score rather than an error.
    pub fn match_skills(&self, candidate_skills: &[String], requirements_text: &str) -> MatchResult {
        let candidate = self.normalizer.normalize(candidate_skills);
        let extracted = self.extractor.extract_ordered(requirements_text);
        let required = self.normalizer.normalize(&extracted);

        let candidate_set: BTreeSet<String> = candidate.iter().cloned().collect();
        let required_set: BTreeSet<String> = required.iter().cloned().collect();

        let exact_match = exact_match_f1(&candidate_set, &required_set);
        let semantic = self.semantic_similarity(&candidate, &required);
        let coverage = skill_coverage(&candidate_set, &required_set);
        let weighted = self.weighted_category_score(&candidate, &required);

        debug!(
            "Match signals: exact={:.3} semantic={:.3} coverage={:.3} weighted={:.3}",
            exact_match, semantic, coverage, weighted
        );

        let mut score = self.weights.exact_match * exact_match
            + self.weights.semantic * semantic
            + self.weights.coverage * coverage
            + self.weights.category * weighted;

        // Surplus bonus compares list lengths, so duplicate skills count.
        if candidate.len() > required.len() {
            let surplus = (candidate.len() - required.len()) as f64;
            score += (surplus * self.weights.surplus_skill_bonus).min(self.weights.surplus_bonus_cap);
        }
        let score = score.min(1.0);

        let matched_skills: BTreeSet<String> =
            candidate_set.intersection(&required_set).cloned().collect();
        let missing_skills: BTreeSet<String> =
            required_set.difference(&candidate_set).cloned().collect();

        MatchResult {
            score,
            matched_skills,
            missing_skills,
        }
    }

    /// Candidate skills that almost match a missing requirement. Display
    /// only; never feeds back into the score.
    pub fn near_miss_hints(
        &self,
        candidate_skills: &[String],
        missing_skills: &BTreeSet<String>,
    ) -> Vec<GapHint> {
        let candidate = self.normalizer.normalize(candidate_skills);
        let mut hints = Vec::new();

        for missing in missing_skills {
            let mut best: Option<(f64, &String)> = None;
            for skill in &candidate {
                let similarity = strsim::jaro_winkler(missing, skill);
                if similarity >= NEAR_MISS_THRESHOLD {
                    match best {
                        Some((best_similarity, _)) if best_similarity >= similarity => {}
                        _ => best = Some((similarity, skill)),
                    }
                }
            }
            if let Some((_, skill)) = best {
                hints.push(GapHint {
                    missing_skill: missing.clone(),
                    closest_candidate_skill: skill.clone(),
                });
            }
        }

        hints
    }

    fn semantic_similarity(&self, candidate: &[String], required: &[String]) -> f64 {
        if candidate.is_empty() || required.is_empty() {
            return 0.0;
        }

        let candidate_text = candidate.join(" ");
        let required_text = required.join(" ");

        match self.vectorizer.similarity(&candidate_text, &required_text) {
            Ok(similarity) => similarity,
            Err(e) => {
                warn!("Semantic similarity unavailable, falling back to zero: {}", e);
                0.0
            }
        }
    }

    fn weighted_category_score(&self, candidate: &[String], required: &[String]) -> f64 {
        let mut total_score = 0.0;
        let mut total_weight = 0.0;

        for (category, weight) in CATEGORY_WEIGHTS {
            let required_subset = category_subset(required, category);
            if required_subset.is_empty() {
                continue;
            }

            let candidate_subset = category_subset(candidate, category);
            total_score += exact_match_f1(&candidate_subset, &required_subset) * weight;
            total_weight += weight;
        }

        if total_weight > 0.0 {
            total_score / total_weight
        } else {
            0.0
        }
    }
}

/// Exact-match F1 between two skill sets. Zero when no requirements exist,
/// so an empty requirements document never inflates the score.
fn exact_match_f1(candidate: &BTreeSet<String>, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let matched = candidate.intersection(required).count() as f64;
    let precision = if candidate.is_empty() {
        0.0
    } else {
        matched / candidate.len() as f64
    };
    let recall = matched / required.len() as f64;

    if precision + recall == 0.0 {
        return 0.0;
    }

    2.0 * precision * recall / (precision + recall)
}

fn skill_coverage(candidate: &BTreeSet<String>, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    candidate.intersection(required).count() as f64 / required.len() as f64
}

fn category_subset(skills: &[String], category: SkillCategory) -> BTreeSet<String> {
    skills
        .iter()
        .filter(|skill| categorize(skill) == category)
        .cloned()
        .collect()
}

fn categorize(skill: &str) -> SkillCategory {
    let skill_lower = skill.to_lowercase();
    let skill_lower = skill_lower.as_str();

    if LANGUAGE_SKILLS.contains(&skill_lower) {
        SkillCategory::Languages
    } else if FRAMEWORK_SKILLS.contains(&skill_lower) {
        SkillCategory::Frameworks
    } else if DATABASE_SKILLS.contains(&skill_lower) {
        SkillCategory::Databases
    } else if CLOUD_SKILLS.contains(&skill_lower) {
        SkillCategory::Cloud
    } else if TOOL_SKILLS.contains(&skill_lower) {
        SkillCategory::Tools
    } else if SOFT_SKILLS.contains(&skill_lower) {
        SkillCategory::SoftSkills
    } else {
        SkillCategory::Technical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(&SkillDictionary::new(), &Config::default()).unwrap()
    }

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let matcher = matcher();
        let pairs = [
            (vec!["python", "react", "docker"], "python and react developer"),
            (vec!["cobol"], "We need python, rust and kubernetes experts"),
            (vec![], "python"),
            (vec!["python"], ""),
        ];

        for (candidate, requirements) in pairs {
            let result = matcher.match_skills(&skills(&candidate), requirements);
            assert!(
                (0.0..=1.0).contains(&result.score),
                "score {} out of bounds for {:?}",
                result.score,
                candidate
            );
        }
    }

    #[test]
    fn test_empty_requirements_score_is_surplus_bonus_only() {
        let matcher = matcher();
        let result = matcher.match_skills(&skills(&["python", "react", "sql"]), "");

        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        // All component signals are zero; only the capped surplus bonus remains.
        assert!((result.score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_surplus_bonus_growth_and_cap() {
        let matcher = matcher();

        let one = matcher.match_skills(&skills(&["python"]), "");
        assert!((one.score - 0.05).abs() < 1e-9);

        let two = matcher.match_skills(&skills(&["python", "java"]), "");
        assert!((two.score - 0.1).abs() < 1e-9);

        let five = matcher.match_skills(&skills(&["python", "java", "rust", "ruby", "php"]), "");
        assert!((five.score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_skills_count_toward_bonus() {
        let matcher = matcher();
        let result = matcher.match_skills(&skills(&["python", "python"]), "");
        assert!((result.score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_match_scores_one() {
        let matcher = matcher();
        let result = matcher.match_skills(&skills(&["python", "react", "sql"]), "python, react, sql");

        let expected: BTreeSet<String> = skills(&["python", "react", "sql"]).into_iter().collect();
        assert_eq!(result.matched_skills, expected);
        assert!(result.missing_skills.is_empty());
        assert!((result.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_skills_are_reported() {
        let matcher = matcher();
        let result = matcher.match_skills(&skills(&["python"]), "We need python, react and docker");

        assert!(result.matched_skills.contains("python"));
        assert!(result.missing_skills.contains("react"));
        assert!(result.missing_skills.contains("docker"));
        assert!(!result.missing_skills.contains("python"));
        assert!(result.score > 0.0);
        assert!(result.score < 1.0);
    }

    #[test]
    fn test_synonyms_align_both_sides() {
        let matcher = matcher();
        // Both surface forms funnel through the same rewrite chain.
        let result = matcher.match_skills(&skills(&["Node.js"]), "nodejs");

        assert!(result.matched_skills.contains("nodejavascript"));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_no_candidate_skills_scores_zero() {
        let matcher = matcher();
        let result = matcher.match_skills(&[], "python and react");

        assert_eq!(result.score, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(!result.missing_skills.is_empty());
    }

    #[test]
    fn test_near_miss_hints_surface_close_skills() {
        let matcher = matcher();
        let missing: BTreeSet<String> = skills(&["postgresql", "docker"]).into_iter().collect();
        let hints = matcher.near_miss_hints(&skills(&["postgres"]), &missing);

        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].missing_skill, "postgresql");
        assert_eq!(hints[0].closest_candidate_skill, "postgres");
    }
}
