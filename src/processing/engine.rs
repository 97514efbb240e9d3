//! Analysis engine tying extraction, summary generation and scoring together

use crate::config::Config;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::ats_scorer::{AtsScorer, ScoreResult};
use crate::processing::keyword_extractor::KeywordExtractor;
use crate::processing::summary_generator::SummaryGenerator;
use crate::processing::vocabulary::Vocabulary;
use crate::resume::ResumeRecord;
use chrono::Utc;
use log::info;

/// Holds one configured instance of each analysis component. The engine keeps
/// no per-request state; every call works only on the record it is given.
pub struct ResumeEngine {
    extractor: KeywordExtractor,
    summarizer: SummaryGenerator,
    scorer: AtsScorer,
    vocabulary_version: String,
}

impl ResumeEngine {
    /// Build an engine from config, loading a custom vocabulary if one is set
    pub fn new(config: &Config) -> Result<Self> {
        let vocabulary = match &config.vocabulary.path {
            Some(path) => {
                info!("Loading vocabulary from {}", path.display());
                Vocabulary::from_file(path)?
            }
            None => Vocabulary::builtin(),
        };
        Self::with_vocabulary(config, &vocabulary)
    }

    pub fn with_vocabulary(config: &Config, vocabulary: &Vocabulary) -> Result<Self> {
        config.validate()?;
        vocabulary.validate()?;

        Ok(Self {
            extractor: KeywordExtractor::new(vocabulary, config.extraction.clone())?,
            summarizer: SummaryGenerator::new(vocabulary, config.summary.clone()),
            scorer: AtsScorer::new(vocabulary, config.scoring.clone())?,
            vocabulary_version: vocabulary.version.clone(),
        })
    }

    /// Replace the summary generator, e.g. to pin its reference date
    pub fn with_summary_generator(mut self, summarizer: SummaryGenerator) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn vocabulary_version(&self) -> &str {
        &self.vocabulary_version
    }

    pub fn extract_keywords(&self, job_description: &str) -> Vec<String> {
        self.extractor.extract(job_description)
    }

    pub fn generate_summary(&self, resume: &ResumeRecord) -> String {
        self.summarizer.generate(resume)
    }

    pub fn score_resume(&self, resume: &ResumeRecord) -> ScoreResult {
        self.scorer.score(resume)
    }

    /// Run the whole pipeline on a copy of `resume`: extract keywords from its
    /// job description, generate a summary, then score.
    pub fn analyze(&self, resume: &ResumeRecord) -> AnalysisReport {
        let mut record = resume.clone();
        record.keywords = self.extract_keywords(&record.job_description);
        let summary = self.generate_summary(&record);
        record.generated_summary = Some(summary.clone());
        let score = self.score_resume(&record);

        info!(
            "Analysis complete: {} keywords, overall score {}",
            record.keywords.len(),
            score.overall_score
        );

        AnalysisReport {
            keywords: record.keywords,
            summary,
            score,
            vocabulary_version: self.vocabulary_version.clone(),
            generated_at: Utc::now(),
        }
    }
}

impl Default for ResumeEngine {
    fn default() -> Self {
        Self {
            extractor: KeywordExtractor::default(),
            summarizer: SummaryGenerator::default(),
            scorer: AtsScorer::default(),
            vocabulary_version: Vocabulary::builtin().version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeEngineError;

    #[test]
    fn test_engine_from_default_config() {
        let engine = ResumeEngine::new(&Config::default()).unwrap();
        assert_eq!(engine.vocabulary_version(), "en-v1");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.scoring.content_weight = 0.7;
        assert!(matches!(
            ResumeEngine::new(&config),
            Err(ResumeEngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_custom_vocabulary_changes_matches() {
        let vocabulary = Vocabulary {
            version: "ops-v1".to_string(),
            technical_skills: vec!["Terraform".to_string()],
            soft_skills: Vec::new(),
            ..Vocabulary::builtin()
        };
        let engine = ResumeEngine::with_vocabulary(&Config::default(), &vocabulary).unwrap();

        assert_eq!(engine.vocabulary_version(), "ops-v1");
        assert_eq!(engine.extract_keywords("Terraform and React"), vec!["Terraform"]);
    }

    #[test]
    fn test_pinned_reference_date_for_current_roles() {
        let summarizer = SummaryGenerator::default()
            .with_reference_date(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let engine = ResumeEngine::default().with_summary_generator(summarizer);

        let mut record = ResumeRecord::default();
        record.personal_info.job_title = "Analyst".to_string();
        record.experience.push(crate::resume::Experience {
            start_date: "2022".to_string(),
            current: true,
            ..Default::default()
        });

        assert_eq!(engine.generate_summary(&record), "Analyst with 2 years of experience.");
    }

    #[test]
    fn test_analyze_does_not_mutate_input() {
        let engine = ResumeEngine::default();
        let record = ResumeRecord {
            job_description: "Looking for Python and Docker".to_string(),
            ..Default::default()
        };

        let report = engine.analyze(&record);
        assert_eq!(report.keywords, vec!["Python", "Docker"]);
        assert!(!report.summary.is_empty());
        assert_eq!(report.score.missing_keywords, vec!["Python", "Docker"]);
        assert!(record.keywords.is_empty());
        assert!(record.generated_summary.is_none());
    }
}
