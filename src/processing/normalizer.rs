//! Skill token normalization

use regex::Regex;

/// Normalizes raw skill strings into canonical lower-case tokens.
///
/// Synonym rules are applied in declaration order by substring replacement
/// over the evolving string, so an earlier rule can rewrite text that a later
/// rule would otherwise have matched. This ordering is part of the contract:
/// "node.js" becomes "nodejavascript" because the "js" rule fires first.
pub struct SkillNormalizer {
    synonyms: Vec<(String, String)>,
    punctuation_regex: Regex,
}

impl Default for SkillNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillNormalizer {
    pub fn new() -> Self {
        let synonyms = [
            ("js", "javascript"),
            ("react.js", "react"),
            ("node.js", "nodejs"),
            ("c++", "cpp"),
            ("c#", "csharp"),
            ("asp.net", "aspnet"),
            ("machine learning", "ml"),
            ("artificial intelligence", "ai"),
            ("data science", "datascience"),
            ("dev ops", "devops"),
            ("ui/ux", "ui ux"),
            ("ui/ux design", "ui ux design"),
        ]
        .iter()
        .map(|(synonym, replacement)| (synonym.to_string(), replacement.to_string()))
        .collect();

        let punctuation_regex = Regex::new(r"[^\w\s]").expect("Invalid punctuation regex");

        Self {
            synonyms,
            punctuation_regex,
        }
    }

    /// Normalize a batch of raw skills, dropping degenerate tokens.
    pub fn normalize(&self, skills: &[String]) -> Vec<String> {
        skills
            .iter()
            .filter_map(|skill| self.normalize_one(skill))
            .collect()
    }

    /// Normalize a single skill string. Returns `None` when the cleaned token
    /// is empty, a single character, or longer than 49 characters.
    pub fn normalize_one(&self, skill: &str) -> Option<String> {
        let mut token = skill.to_lowercase().trim().to_string();

        for (synonym, replacement) in &self.synonyms {
            if token.contains(synonym.as_str()) {
                token = token.replace(synonym.as_str(), replacement);
            }
        }

        let token = self
            .punctuation_regex
            .replace_all(&token, "")
            .trim()
            .to_string();

        let length = token.chars().count();
        if length > 1 && length <= 49 {
            Some(token)
        } else {
            None
        }
    }
}
