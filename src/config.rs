//! Configuration management for the resume engine

use crate::error::{Result, ResumeEngineError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub summary: SummaryConfig,
    pub scoring: ScoringConfig,
    pub vocabulary: VocabularyConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Upper bound on the number of keywords returned
    pub max_keywords: usize,
    /// A bullet line must be strictly longer than this to become a phrase
    pub min_phrase_chars: usize,
    pub min_phrase_words: usize,
    pub max_phrase_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_chars: usize,
    /// Truncation only backtracks to a period at or after this character
    pub backtrack_floor: usize,
    pub top_skills: usize,
    pub key_achievements: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub format_weight: f64,
    pub content_weight: f64,
    pub format_suggestion_threshold: u8,
    pub content_suggestion_threshold: u8,
    pub keyword_suggestion_threshold: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Optional TOML/JSON file replacing the built-in vocabulary tables
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_keywords: 20,
            min_phrase_chars: 10,
            min_phrase_words: 2,
            max_phrase_words: 5,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_chars: 500,
            backtrack_floor: 400,
            top_skills: 5,
            key_achievements: 2,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 0.5,
            format_weight: 0.3,
            content_weight: 0.2,
            format_suggestion_threshold: 80,
            content_suggestion_threshold: 80,
            keyword_suggestion_threshold: 50,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            summary: SummaryConfig::default(),
            scoring: ScoringConfig::default(),
            vocabulary: VocabularyConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load the config from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeEngineError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeEngineError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-resume")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        let weights = [scoring.keyword_weight, scoring.format_weight, scoring.content_weight];

        if weights.iter().any(|w| *w < 0.0) {
            return Err(ResumeEngineError::Configuration(
                "Scoring weights must not be negative".to_string(),
            ));
        }

        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > 0.001 {
            return Err(ResumeEngineError::Configuration(format!(
                "Scoring weights must sum to 1.0 (got {:.3})",
                total
            )));
        }

        if self.extraction.min_phrase_words > self.extraction.max_phrase_words {
            return Err(ResumeEngineError::Configuration(format!(
                "min_phrase_words ({}) exceeds max_phrase_words ({})",
                self.extraction.min_phrase_words, self.extraction.max_phrase_words
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extraction.max_keywords, 20);
        assert_eq!(config.summary.max_chars, 500);
        assert_eq!(config.scoring.keyword_suggestion_threshold, 50);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = Config::default();
        config.scoring.keyword_weight = 0.9;
        assert!(matches!(config.validate(), Err(ResumeEngineError::Configuration(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = Config::default();
        config.scoring.keyword_weight = -0.5;
        config.scoring.format_weight = 1.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_phrase_bounds_checked() {
        let mut config = Config::default();
        config.extraction.min_phrase_words = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.detailed = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
