//! Candidate profile extraction from resume text

use crate::error::Result;
use crate::processing::dictionary::SkillDictionary;
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::tagger::{EntityLabel, EntityTagger};
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured facts pulled out of one resume document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub experience_level: ExperienceLevel,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            email: String::new(),
            phone: String::new(),
            skills: Vec::new(),
            education: Vec::new(),
            experience: Vec::new(),
            experience_level: ExperienceLevel::Junior,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Classify from the extracted experience entries and skill list.
    pub fn classify(experience: &[String], skills: &[String]) -> Self {
        let senior_marker = experience.iter().any(|entry| {
            let lower = entry.to_lowercase();
            lower.contains("senior") || lower.contains("lead")
        });

        if experience.len() > 3 || senior_marker {
            ExperienceLevel::Senior
        } else if experience.len() > 1 || skills.len() > 8 {
            ExperienceLevel::Mid
        } else {
            ExperienceLevel::Junior
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        };
        write!(f, "{}", label)
    }
}

/// Extracts a [`CandidateProfile`] from raw resume text.
///
/// Extraction is best effort and never fails: empty or unreadable input
/// yields a fully defaulted profile so the pipeline can continue with a
/// zero score instead of aborting the request.
pub struct ProfileExtractor {
    skill_extractor: SkillExtractor,
    tagger: Option<Box<dyn EntityTagger>>,
    email_regex: Regex,
    phone_regex: Regex,
    name_line_regex: Regex,
    education_keywords: Vec<String>,
    experience_keywords: Vec<String>,
}

impl ProfileExtractor {
    pub fn new(dictionary: &SkillDictionary) -> Result<Self> {
        let skill_extractor = SkillExtractor::new(dictionary)?;

        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"(\+?1?[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
                .expect("Invalid phone regex");

        let name_line_regex = Regex::new(r"^[A-Za-z\s]+$").expect("Invalid name line regex");

        let education_keywords = [
            "bachelor",
            "master",
            "phd",
            "degree",
            "university",
            "college",
            "school",
            "academy",
            "institute",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let experience_keywords = [
            "experience",
            "work",
            "job",
            "position",
            "role",
            "responsibility",
            "achievement",
            "project",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Ok(Self {
            skill_extractor,
            tagger: None,
            email_regex,
            phone_regex,
            name_line_regex,
            education_keywords,
            experience_keywords,
        })
    }

    /// Attach an entity tagging backend for name extraction.
    pub fn with_tagger(mut self, tagger: Box<dyn EntityTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Extract a profile from resume text. Never fails; degenerate input
    /// produces the default profile.
    pub fn extract(&self, text: &str) -> CandidateProfile {
        if text.trim().is_empty() {
            debug!("Empty resume text, returning default profile");
            return CandidateProfile::default();
        }

        let name = self.extract_name(text);
        let email = self.extract_email(text);
        let phone = self.extract_phone(text);
        let skills = self.skill_extractor.extract_ordered(text);
        let education = self.extract_sections(text, &self.education_keywords, 3);
        let experience = self.extract_sections(text, &self.experience_keywords, 4);
        let experience_level = ExperienceLevel::classify(&experience, &skills);

        debug!(
            "Extracted profile '{}': {} skills, {} education entries, {} experience entries",
            name,
            skills.len(),
            education.len(),
            experience.len()
        );

        CandidateProfile {
            name,
            email,
            phone,
            skills,
            education,
            experience,
            experience_level,
        }
    }

    /// Shared access to the skill extractor, so callers can run the same
    /// extraction over requirements text.
    pub fn skill_extractor(&self) -> &SkillExtractor {
        &self.skill_extractor
    }

    fn extract_name(&self, text: &str) -> String {
        if let Some(tagger) = &self.tagger {
            let snippet: String = text.chars().take(1000).collect();
            match tagger.tag(&snippet) {
                Ok(entities) => {
                    if let Some(person) = entities
                        .iter()
                        .find(|entity| entity.label == EntityLabel::Person)
                    {
                        return person.text.trim().to_string();
                    }
                }
                Err(e) => {
                    warn!("Entity tagger failed, falling back to line scan: {}", e);
                }
            }
        }

        // Fallback: the name is usually one of the first short, letters-only
        // lines of the document.
        for line in text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(10)
        {
            let word_count = line.split_whitespace().count();
            if word_count <= 4 && line.chars().count() > 2 && self.name_line_regex.is_match(line) {
                return line.to_string();
            }
        }

        "Unknown".to_string()
    }

    fn extract_email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn extract_phone(&self, text: &str) -> String {
        if let Some(caps) = self.phone_regex.captures(text) {
            let mut phone = String::new();
            for i in 1..caps.len() {
                if let Some(group) = caps.get(i) {
                    phone.push_str(group.as_str());
                }
            }
            return phone;
        }
        String::new()
    }

    /// Keyword-anchored line scan: a line containing any keyword starts an
    /// entry that absorbs up to `following_lines` subsequent lines.
    fn extract_sections(
        &self,
        text: &str,
        keywords: &[String],
        following_lines: usize,
    ) -> Vec<String> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut entries = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let line_lower = line.to_lowercase();
            if keywords
                .iter()
                .any(|keyword| line_lower.contains(keyword.as_str()))
            {
                let mut entry = line.to_string();
                for j in 1..=following_lines {
                    if i + j < lines.len() {
                        entry.push(' ');
                        entry.push_str(lines[i + j]);
                    }
                }
                entries.push(entry.trim().to_string());
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::tagger::TaggedEntity;

    const SAMPLE_RESUME: &str = "\
John Doe
john.doe@example.com
(555) 123-4567

Experience with Python and React development.
Senior Software Engineer at Initech
Bachelor of Science, State University
Graduated 2018
GPA 3.8
";

    fn extractor() -> ProfileExtractor {
        ProfileExtractor::new(&SkillDictionary::new()).unwrap()
    }

    struct StubTagger {
        entities: Vec<TaggedEntity>,
    }

    impl EntityTagger for StubTagger {
        fn tag(&self, _text: &str) -> anyhow::Result<Vec<TaggedEntity>> {
            Ok(self.entities.clone())
        }
    }

    struct FailingTagger;

    impl EntityTagger for FailingTagger {
        fn tag(&self, _text: &str) -> anyhow::Result<Vec<TaggedEntity>> {
            anyhow::bail!("tagger backend unavailable")
        }
    }

    #[test]
    fn test_empty_text_returns_default_profile() {
        let profile = extractor().extract("");

        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
        assert!(profile.skills.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.experience.is_empty());
        assert_eq!(profile.experience_level, ExperienceLevel::Junior);
    }

    #[test]
    fn test_name_from_first_lines() {
        let profile = extractor().extract(SAMPLE_RESUME);
        assert_eq!(profile.name, "John Doe");
    }

    #[test]
    fn test_name_skips_non_name_lines() {
        let text = "Resume 2024\ncontact@example.com\nJane Smith\nEngineer";
        let profile = extractor().extract(text);
        assert_eq!(profile.name, "Jane Smith");
    }

    #[test]
    fn test_tagger_provides_name() {
        let tagger = StubTagger {
            entities: vec![
                TaggedEntity {
                    text: "Initech".to_string(),
                    label: EntityLabel::Organization,
                },
                TaggedEntity {
                    text: "Maria Garcia".to_string(),
                    label: EntityLabel::Person,
                },
            ],
        };
        let extractor = extractor().with_tagger(Box::new(tagger));

        let profile = extractor.extract(SAMPLE_RESUME);
        assert_eq!(profile.name, "Maria Garcia");
    }

    #[test]
    fn test_tagger_failure_falls_back_to_line_scan() {
        let extractor = extractor().with_tagger(Box::new(FailingTagger));

        let profile = extractor.extract(SAMPLE_RESUME);
        assert_eq!(profile.name, "John Doe");
    }

    #[test]
    fn test_tagger_without_person_span_falls_back() {
        let tagger = StubTagger {
            entities: vec![TaggedEntity {
                text: "2018".to_string(),
                label: EntityLabel::Other("date".to_string()),
            }],
        };
        let extractor = extractor().with_tagger(Box::new(tagger));

        let profile = extractor.extract(SAMPLE_RESUME);
        assert_eq!(profile.name, "John Doe");
    }

    #[test]
    fn test_email_and_phone_extraction() {
        let profile = extractor().extract(SAMPLE_RESUME);

        assert_eq!(profile.email, "john.doe@example.com");
        assert_eq!(profile.phone, "5551234567");
    }

    #[test]
    fn test_skills_extracted_from_resume() {
        let profile = extractor().extract(SAMPLE_RESUME);

        assert!(profile.skills.contains(&"python".to_string()));
        assert!(profile.skills.contains(&"react".to_string()));
    }

    #[test]
    fn test_education_entries_absorb_following_lines() {
        let profile = extractor().extract(SAMPLE_RESUME);

        let entry = profile
            .education
            .iter()
            .find(|e| e.contains("State University"))
            .expect("education entry not found");
        assert!(entry.contains("Graduated 2018"));
        assert!(entry.contains("GPA 3.8"));
    }

    #[test]
    fn test_experience_entries_found() {
        let profile = extractor().extract(SAMPLE_RESUME);
        assert!(!profile.experience.is_empty());
    }

    #[test]
    fn test_experience_level_classification() {
        let many_entries: Vec<String> = (0..4).map(|i| format!("Position {}", i)).collect();
        assert_eq!(
            ExperienceLevel::classify(&many_entries, &[]),
            ExperienceLevel::Senior
        );

        let lead_entry = vec!["Lead Engineer at Initech".to_string()];
        assert_eq!(
            ExperienceLevel::classify(&lead_entry, &[]),
            ExperienceLevel::Senior
        );

        let two_entries = vec!["Developer".to_string(), "Intern".to_string()];
        assert_eq!(
            ExperienceLevel::classify(&two_entries, &[]),
            ExperienceLevel::Mid
        );

        let many_skills: Vec<String> = (0..9).map(|i| format!("skill{}", i)).collect();
        assert_eq!(
            ExperienceLevel::classify(&[], &many_skills),
            ExperienceLevel::Mid
        );

        assert_eq!(
            ExperienceLevel::classify(&[], &["python".to_string()]),
            ExperienceLevel::Junior
        );
    }
}
