//! Canonical skill vocabulary grouped by category

/// Fixed skill vocabulary, built once at startup and shared read-only by the
/// extraction and scoring components.
pub struct SkillDictionary {
    categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

fn category(name: &str, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

impl SkillDictionary {
    pub fn new() -> Self {
        let categories = vec![
            category(
                "programming",
                &[
                    "python",
                    "java",
                    "javascript",
                    "c++",
                    "c#",
                    "php",
                    "ruby",
                    "swift",
                    "kotlin",
                    "go",
                    "rust",
                    "scala",
                    "r",
                    "matlab",
                ],
            ),
            category(
                "web_development",
                &[
                    "html", "css", "react", "angular", "vue", "node.js", "express", "django",
                    "flask", "spring", "asp.net", "laravel",
                ],
            ),
            category(
                "databases",
                &[
                    "mysql",
                    "postgresql",
                    "mongodb",
                    "redis",
                    "oracle",
                    "sql",
                    "sql server",
                    "sqlite",
                    "dynamodb",
                    "cassandra",
                ],
            ),
            category(
                "cloud",
                &[
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
                ],
            ),
            category(
                "data_science",
                &[
                    "pandas",
                    "numpy",
                    "scikit-learn",
                    "tensorflow",
                    "pytorch",
                    "matplotlib",
                    "seaborn",
                    "jupyter",
                    "spark",
                    "hadoop",
                ],
            ),
            category(
                "mobile",
                &[
                    "android",
                    "ios",
                    "react native",
                    "flutter",
                    "xamarin",
                    "swift",
                    "kotlin",
                ],
            ),
            category(
                "devops",
                &[
                    "docker",
                    "kubernetes",
                    "jenkins",
                    "gitlab ci",
                    "github actions",
                    "terraform",
                    "ansible",
                    "chef",
                    "puppet",
                ],
            ),
            category(
                "testing",
                &[
                    "selenium", "junit", "pytest", "mocha", "jest", "cypress", "postman", "soapui",
                ],
            ),
            category(
                "design",
                &[
                    "figma",
                    "adobe xd",
                    "sketch",
                    "photoshop",
                    "illustrator",
                    "invision",
                    "zeplin",
                ],
            ),
            category(
                "project_management",
                &[
                    "agile",
                    "scrum",
                    "kanban",
                    "jira",
                    "confluence",
                    "trello",
                    "asana",
                    "monday.com",
                ],
            ),
            category(
                "soft_skills",
                &[
                    "leadership",
                    "communication",
                    "teamwork",
                    "problem solving",
                    "critical thinking",
                    "time management",
                    "adaptability",
                ],
            ),
        ];

        Self { categories }
    }

    /// All canonical tokens across categories. Tokens appearing in more than
    /// one category (e.g. docker, kotlin) are listed once.
    pub fn all_skills(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut skills = Vec::new();
        for cat in &self.categories {
            for skill in &cat.skills {
                if seen.insert(skill.clone()) {
                    skills.push(skill.clone());
                }
            }
        }
        skills
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn skill_count(&self) -> usize {
        self.all_skills().len()
    }
}

impl Default for SkillDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_categories() {
        let dict = SkillDictionary::new();
        assert_eq!(dict.categories().len(), 11);
        assert!(dict.categories().iter().any(|c| c.name == "programming"));
        assert!(dict.categories().iter().any(|c| c.name == "soft_skills"));
    }

    #[test]
    fn test_all_skills_deduplicates() {
        let dict = SkillDictionary::new();
        let skills = dict.all_skills();

        // docker is listed under both cloud and devops
        assert_eq!(skills.iter().filter(|s| s.as_str() == "docker").count(), 1);
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"sql server".to_string()));
    }
}
