//! Caller-owned editing session around a resume record
//!
//! A front end collects fields step by step (personal info, experience,
//! education, skills, projects, job description) and then asks for a summary
//! and a score. The session holds that evolving record plus the latest
//! outputs; the engine itself stays stateless.

use crate::processing::ats_scorer::ScoreResult;
use crate::processing::engine::ResumeEngine;
use crate::resume::record::{Education, Experience, PersonalInfo, Project, ResumeRecord, SkillCategory};
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct ResumeSession {
    record: ResumeRecord,
    generated_summary: String,
    ats_score: Option<ScoreResult>,
}

impl ResumeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: ResumeRecord) -> Self {
        let generated_summary = record.generated_summary.clone().unwrap_or_default();
        Self {
            record,
            generated_summary,
            ats_score: None,
        }
    }

    pub fn record(&self) -> &ResumeRecord {
        &self.record
    }

    pub fn into_record(self) -> ResumeRecord {
        self.record
    }

    pub fn generated_summary(&self) -> &str {
        &self.generated_summary
    }

    /// The latest score, or a placeholder prompting the user to finish
    pub fn ats_score(&self) -> ScoreResult {
        self.ats_score.clone().unwrap_or_else(ScoreResult::pending)
    }

    pub fn update_personal_info(&mut self, personal_info: PersonalInfo) {
        self.record.personal_info = personal_info;
    }

    pub fn update_experience(&mut self, experience: Vec<Experience>) {
        self.record.experience = experience;
    }

    pub fn update_education(&mut self, education: Vec<Education>) {
        self.record.education = education;
    }

    pub fn update_skills(&mut self, skills: Vec<SkillCategory>) {
        self.record.skills = skills;
    }

    pub fn update_projects(&mut self, projects: Vec<Project>) {
        self.record.projects = projects;
    }

    /// Replace the job description. Title and company are only overwritten
    /// when a non-blank value is supplied.
    pub fn update_job_description(
        &mut self,
        job_description: impl Into<String>,
        job_title: Option<&str>,
        company: Option<&str>,
    ) {
        self.record.job_description = job_description.into();

        if let Some(title) = job_title.filter(|t| !t.trim().is_empty()) {
            self.record.job_title = title.to_string();
        }
        if let Some(company) = company.filter(|c| !c.trim().is_empty()) {
            self.record.company = company.to_string();
        }
    }

    pub fn update_keywords(&mut self, keywords: Vec<String>) {
        self.record.keywords = keywords;
    }

    /// Re-extract keywords from the current job description
    pub fn refresh_keywords(&mut self, engine: &ResumeEngine) -> &[String] {
        let keywords = engine.extract_keywords(&self.record.job_description);
        debug!("Refreshed {} keywords", keywords.len());
        self.record.keywords = keywords;
        &self.record.keywords
    }

    /// Generate the summary, store it on the record and rescore
    pub fn generate_resume(&mut self, engine: &ResumeEngine) -> &ScoreResult {
        let summary = engine.generate_summary(&self.record);
        self.record.generated_summary = Some(summary.clone());
        self.generated_summary = summary;

        self.ats_score.insert(engine.score_resume(&self.record))
    }

    /// Rescore using the most recently generated summary
    pub fn check_ats_compatibility(&mut self, engine: &ResumeEngine) -> &ScoreResult {
        let mut record = self.record.clone();
        if !self.generated_summary.is_empty() {
            record.generated_summary = Some(self.generated_summary.clone());
        }

        self.ats_score.insert(engine.score_resume(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_score_before_generation() {
        let session = ResumeSession::new();
        let score = session.ats_score();
        assert_eq!(score.overall_score, 0);
        assert_eq!(
            score.suggestions,
            vec!["Complete your resume and add a job description to get an ATS compatibility score."]
        );
    }

    #[test]
    fn test_from_record_keeps_existing_summary() {
        let record = ResumeRecord {
            generated_summary: Some("Seasoned engineer.".to_string()),
            ..Default::default()
        };
        let session = ResumeSession::from_record(record.clone());
        assert_eq!(session.generated_summary(), "Seasoned engineer.");
        assert_eq!(session.into_record(), record);
    }

    #[test]
    fn test_job_description_keeps_existing_title_and_company() {
        let mut session = ResumeSession::new();
        session.update_job_description("First posting", Some("Engineer"), Some("Acme"));
        session.update_job_description("Second posting", None, Some("  "));

        let record = session.record();
        assert_eq!(record.job_description, "Second posting");
        assert_eq!(record.job_title, "Engineer");
        assert_eq!(record.company, "Acme");
    }

    #[test]
    fn test_generate_resume_stores_summary_and_score() {
        let engine = ResumeEngine::default();
        let mut session = ResumeSession::new();
        session.update_skills(vec![SkillCategory {
            category: "Languages".to_string(),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        }]);
        session.update_job_description("We are hiring a Rust developer", None, None);
        assert_eq!(session.refresh_keywords(&engine), ["Rust"]);

        let score = session.generate_resume(&engine).clone();
        assert!(!session.generated_summary().is_empty());
        assert_eq!(
            session.record().generated_summary.as_deref(),
            Some(session.generated_summary())
        );
        assert_eq!(score.keyword_match_score, 100);
        assert_eq!(session.ats_score(), score);
    }

    #[test]
    fn test_check_compatibility_uses_generated_summary() {
        let engine = ResumeEngine::default();
        let mut session = ResumeSession::new();
        session.update_job_description("Docker", None, None);
        session.update_keywords(vec!["Docker".to_string()]);

        let before = session.check_ats_compatibility(&engine).content_score;
        session.generate_resume(&engine);
        let after = session.check_ats_compatibility(&engine).content_score;

        assert_eq!(after, before + 15);
    }
}
