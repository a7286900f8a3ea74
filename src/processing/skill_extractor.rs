//! Skill extraction from free text

use crate::error::{Result, ResumeScreenerError};
use crate::processing::dictionary::SkillDictionary;
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::BTreeSet;

/// Extracts known skill tokens from raw text.
///
/// Two passes over the lower-cased input: a dictionary pass testing substring
/// containment of every canonical token, and a pattern pass combining
/// category alternation regexes with cue phrases ("proficient in ...",
/// "technologies: ..."). The same extractor serves resume text and
/// requirements text so that matching stays symmetric on vocabulary.
pub struct SkillExtractor {
    dictionary_automaton: AhoCorasick,
    dictionary_skills: Vec<String>,
    alternation_patterns: Vec<Regex>,
    cue_patterns: Vec<Regex>,
}

impl SkillExtractor {
    pub fn new(dictionary: &SkillDictionary) -> Result<Self> {
        let dictionary_skills = dictionary.all_skills();

        // Overlapping search replicates independent containment checks: a
        // short token like "r" must still be found inside a longer match.
        let dictionary_automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&dictionary_skills)
            .map_err(|e| {
                ResumeScreenerError::Processing(format!("Failed to build skill automaton: {}", e))
            })?;

        let alternation_patterns = [
            r"\b(?:python|java|javascript|js|c\+\+|c#|php|ruby|swift|kotlin|go|rust|scala|r|matlab)\b",
            r"\b(?:html|css|react|angular|vue|node\.?js|express|django|flask|spring|asp\.?net|laravel)\b",
            r"\b(?:mysql|postgresql|mongodb|redis|oracle|sql\s+server|sqlite|dynamodb|cassandra)\b",
            r"\b(?:aws|azure|google\s+cloud|docker|kubernetes|terraform|jenkins|git|github|gitlab)\b",
            r"\b(?:pandas|numpy|scikit-learn|tensorflow|pytorch|matplotlib|seaborn|jupyter|spark|hadoop)\b",
            r"\b(?:android|ios|react\s+native|flutter|xamarin)\b",
            r"\b(?:selenium|junit|pytest|mocha|jest|cypress|postman|soapui)\b",
            r"\b(?:figma|adobe\s+xd|sketch|photoshop|illustrator|invision|zeplin)\b",
            r"\b(?:agile|scrum|kanban|jira|confluence|trello|asana|monday\.com)\b",
            r"\b(?:leadership|communication|teamwork|problem\s+solving|critical\s+thinking|time\s+management|adaptability)\b",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid skill alternation regex"))
        .collect();

        let cue_patterns = [
            r"\b(?:proficient in|skilled in|experience with|knowledge of)\s+([^,\n]+)",
            r"\b(?:technologies?|tools?|languages?|frameworks?):\s*([^,\n]+)",
            r"\b(?:expertise in|specialized in)\s+([^,\n]+)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid cue phrase regex"))
        .collect();

        Ok(Self {
            dictionary_automaton,
            dictionary_skills,
            alternation_patterns,
            cue_patterns,
        })
    }

    /// Extract the set of skill tokens found in `text`.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut skills = BTreeSet::new();
        let text_lower = text.to_lowercase();

        for mat in self.dictionary_automaton.find_overlapping_iter(&text_lower) {
            let skill = &self.dictionary_skills[mat.pattern().as_usize()];
            skills.insert(skill.clone());
        }

        for pattern in &self.alternation_patterns {
            for mat in pattern.find_iter(&text_lower) {
                skills.insert(mat.as_str().to_string());
            }
        }

        for pattern in &self.cue_patterns {
            for caps in pattern.captures_iter(&text_lower) {
                if let Some(group) = caps.get(1) {
                    for term in group.as_str().split(|c| c == ',' || c == ';' || c == '&') {
                        let term = term.trim();
                        let length = term.chars().count();
                        if length > 2 && length < 50 {
                            skills.insert(term.to_string());
                        }
                    }
                }
            }
        }

        skills
    }

    /// Extract as an ordered sequence for profile storage.
    pub fn extract_ordered(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(&SkillDictionary::new()).unwrap()
    }

    #[test]
    fn test_extraction_is_case_insensitive() {
        let extractor = extractor();

        let lower = extractor.extract("python, react");
        let upper = extractor.extract("REACT and PYTHON");

        assert!(lower.contains("python"));
        assert!(lower.contains("react"));
        assert!(upper.contains("python"));
        assert!(upper.contains("react"));
    }

    #[test]
    fn test_dictionary_containment_is_substring_based() {
        let extractor = extractor();
        let skills = extractor.extract("I enjoy programming");

        // "r" is a canonical token and matches inside "programming"
        assert!(skills.contains("r"));
    }

    #[test]
    fn test_alternation_patterns() {
        let extractor = extractor();
        let skills = extractor.extract("Deployed with Docker on AWS, tested with pytest");

        assert!(skills.contains("docker"));
        assert!(skills.contains("aws"));
        assert!(skills.contains("pytest"));
    }

    #[test]
    fn test_alternation_matches_nodejs_variants() {
        let extractor = extractor();

        assert!(extractor.extract("nodejs backend work").contains("nodejs"));
        assert!(extractor.extract("node.js backend work").contains("node.js"));
    }

    #[test]
    fn test_cue_phrase_capture_and_split() {
        let extractor = extractor();
        let skills = extractor.extract("Technologies: Elixir; Phoenix\nOther interests");

        assert!(skills.contains("elixir"));
        assert!(skills.contains("phoenix"));
    }

    #[test]
    fn test_cue_phrase_drops_short_terms() {
        let extractor = extractor();
        let skills = extractor.extract("expertise in ab");

        assert!(!skills.contains("ab"));
    }

    #[test]
    fn test_extract_ordered_is_sorted() {
        let extractor = extractor();
        let skills = extractor.extract_ordered("python and docker and aws");

        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }
}
