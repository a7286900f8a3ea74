//! Screening engine coordinating profile extraction, matching, and
//! interview planning

use crate::config::Config;
use crate::error::Result;
use crate::interview::{InterviewPlan, InterviewRecommender};
use crate::processing::dictionary::SkillDictionary;
use crate::processing::matcher::{GapHint, MatchResult, SkillMatcher};
use crate::processing::profile::{CandidateProfile, ProfileExtractor};
use crate::processing::tagger::EntityTagger;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Everything the pipeline produces for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub profile: CandidateProfile,
    pub match_result: MatchResult,
    pub interview_plan: InterviewPlan,
    pub gap_hints: Vec<GapHint>,
}

/// Coordinates the screening pipeline against one requirements document.
///
/// The requirements text is held by the engine and can be rebound between
/// candidates; skill sets are recomputed fresh on every screen call, so a
/// rebind is all a bulk re-score needs.
pub struct ScreeningEngine {
    profile_extractor: ProfileExtractor,
    matcher: SkillMatcher,
    recommender: InterviewRecommender,
    requirements: String,
}

impl ScreeningEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Self::build(config, InterviewRecommender::new())
    }

    /// Engine with a seeded recommender, for reproducible question draws.
    pub fn with_seed(config: &Config, seed: u64) -> Result<Self> {
        Self::build(config, InterviewRecommender::with_seed(seed))
    }

    fn build(config: &Config, recommender: InterviewRecommender) -> Result<Self> {
        let dictionary = SkillDictionary::new();
        info!(
            "Skill dictionary loaded: {} skills in {} categories",
            dictionary.skill_count(),
            dictionary.categories().len()
        );

        Ok(Self {
            profile_extractor: ProfileExtractor::new(&dictionary)?,
            matcher: SkillMatcher::new(&dictionary, config)?,
            recommender,
            requirements: String::new(),
        })
    }

    /// Attach an entity tagging backend for name extraction.
    pub fn with_tagger(mut self, tagger: Box<dyn EntityTagger>) -> Self {
        self.profile_extractor = self.profile_extractor.with_tagger(tagger);
        self
    }

    /// Rebind the requirements document all subsequent screens run against.
    pub fn update_requirements(&mut self, requirements: &str) {
        self.requirements = requirements.to_lowercase();
        debug!("Requirements updated ({} chars)", self.requirements.len());
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    pub fn extract_profile(&self, resume_text: &str) -> CandidateProfile {
        self.profile_extractor.extract(resume_text)
    }

    /// Score an arbitrary skill list against the current requirements.
    pub fn match_skills(&self, candidate_skills: &[String]) -> MatchResult {
        self.matcher.match_skills(candidate_skills, &self.requirements)
    }

    pub fn recommend(
        &mut self,
        profile: &CandidateProfile,
        match_result: &MatchResult,
    ) -> InterviewPlan {
        self.recommender.recommend(profile, match_result)
    }

    /// Run the full pipeline over one resume text.
    pub fn screen(&mut self, resume_text: &str) -> ScreeningOutcome {
        let profile = self.profile_extractor.extract(resume_text);
        info!(
            "Extracted profile for {} ({} skills, {} experience entries)",
            profile.name,
            profile.skills.len(),
            profile.experience.len()
        );

        let match_result = self.matcher.match_skills(&profile.skills, &self.requirements);
        info!("Match score: {:.1}%", match_result.score * 100.0);

        let gap_hints = self
            .matcher
            .near_miss_hints(&profile.skills, &match_result.missing_skills);
        let interview_plan = self.recommender.recommend(&profile, &match_result);

        ScreeningOutcome {
            profile,
            match_result,
            interview_plan,
            gap_hints,
        }
    }
}
