//! Text processing and screening pipeline module

pub mod dictionary;
pub mod engine;
pub mod matcher;
pub mod normalizer;
pub mod profile;
pub mod skill_extractor;
pub mod tagger;
pub mod tfidf;

pub use dictionary::SkillDictionary;
pub use engine::{ScreeningEngine, ScreeningOutcome};
pub use matcher::{GapHint, MatchResult, SkillMatcher};
pub use profile::{CandidateProfile, ExperienceLevel, ProfileExtractor};
