//! Report produced by one run of the analysis pipeline

use crate::processing::ats_scorer::{ScoreLevel, ScoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Keywords extracted from the job description, in extraction order
    pub keywords: Vec<String>,
    pub summary: String,
    pub score: ScoreResult,
    pub vocabulary_version: String,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn level(&self) -> ScoreLevel {
        ScoreLevel::from_score(self.score.overall_score)
    }

    pub fn matched_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .filter(|k| !self.score.missing_keywords.contains(k))
            .map(String::as_str)
    }

    /// One-line verdict for the overall score
    pub fn verdict(&self) -> &'static str {
        match self.level() {
            ScoreLevel::Success => "Strong ATS compatibility",
            ScoreLevel::Warning => "Moderate ATS compatibility; a few changes will help",
            ScoreLevel::Danger => "Low ATS compatibility; significant changes recommended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(overall: u8) -> AnalysisReport {
        AnalysisReport {
            keywords: vec!["Rust".to_string(), "Docker".to_string(), "Go".to_string()],
            summary: String::new(),
            score: ScoreResult {
                overall_score: overall,
                missing_keywords: vec!["Docker".to_string()],
                ..ScoreResult::pending()
            },
            vocabulary_version: "en-v1".to_string(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_matched_keywords_preserve_order() {
        let report = report(90);
        let matched: Vec<&str> = report.matched_keywords().collect();
        assert_eq!(matched, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_level_follows_overall_score() {
        assert_eq!(report(85).level(), ScoreLevel::Success);
        assert_eq!(report(65).level(), ScoreLevel::Warning);
        assert_eq!(report(10).level(), ScoreLevel::Danger);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(report(70)).unwrap();
        assert_eq!(json["vocabularyVersion"], "en-v1");
        assert_eq!(json["score"]["overallScore"], 70);
        assert!(json.get("generatedAt").is_some());
    }
}
