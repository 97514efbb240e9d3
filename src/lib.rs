//! ATS resume engine
//!
//! Keyword extraction from job descriptions, professional summary generation
//! from structured resumes and applicant tracking system compatibility
//! scoring. The free functions below use the built-in vocabulary and default
//! configuration; build a [`ResumeEngine`] to customise either.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod resume;

pub use config::Config;
pub use error::{Result, ResumeEngineError};
pub use output::AnalysisReport;
pub use processing::ats_scorer::{ScoreLevel, ScoreResult};
pub use processing::engine::ResumeEngine;
pub use processing::vocabulary::Vocabulary;
pub use resume::{ResumeRecord, ResumeSession};

use std::sync::OnceLock;

fn default_engine() -> &'static ResumeEngine {
    static ENGINE: OnceLock<ResumeEngine> = OnceLock::new();
    ENGINE.get_or_init(ResumeEngine::default)
}

/// Keywords found in a job description, at most 20, in extraction order
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    default_engine().extract_keywords(job_description)
}

/// A professional summary of at most 500 characters
pub fn generate_summary(resume: &ResumeRecord) -> String {
    default_engine().generate_summary(resume)
}

/// ATS compatibility scores; without a job description the keyword score is 0
pub fn score_resume(resume: &ResumeRecord) -> ScoreResult {
    default_engine().score_resume(resume)
}
