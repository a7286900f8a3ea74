//! Configuration management for the resume screener

use crate::error::{Result, ResumeScreenerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub vectorizer: VectorizerConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Weights for the blended match score. The defaults reproduce the
/// screening formula exactly; overriding them changes how the four
/// signals are combined but not how each signal is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub exact_match_weight: f64,
    pub semantic_weight: f64,
    pub coverage_weight: f64,
    pub category_weight: f64,
    /// Bonus per candidate skill beyond the required count.
    pub surplus_skill_bonus: f64,
    /// Upper bound on the total surplus bonus.
    pub surplus_bonus_cap: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Vocabulary cap for the TF-IDF vectorizer.
    pub max_features: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_interview_plan: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                exact_match_weight: 0.4,
                semantic_weight: 0.3,
                coverage_weight: 0.2,
                category_weight: 0.1,
                surplus_skill_bonus: 0.05,
                surplus_bonus_cap: 0.1,
            },
            vectorizer: VectorizerConfig { max_features: 1000 },
            input: InputConfig {
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                include_interview_plan: true,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeScreenerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit path. Unlike `load`, a missing file is an error.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ResumeScreenerError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}
