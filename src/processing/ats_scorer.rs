//! ATS (Applicant Tracking System) compatibility scoring
//!
//! Three sub-scores feed a weighted overall score: keyword coverage against
//! the extracted job keywords, structural completeness (format) and
//! substantive quality (content). Every rule that deducts points has a
//! matching piece of advice, and both are driven by the same checks.

use crate::config::ScoringConfig;
use crate::error::{Result, ResumeEngineError};
use crate::processing::vocabulary::Vocabulary;
use crate::resume::ResumeRecord;
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const NO_JOB_DESCRIPTION: &str = "Add a job description to get a more accurate ATS score.";
const PENDING: &str = "Complete your resume and add a job description to get an ATS compatibility score.";
const CONTACT_INFO: &str = "Include your email and phone number in the contact information.";
const ADD_EXPERIENCE: &str = "Add your work experience with detailed responsibilities and achievements.";
const PROPER_DATES: &str = "Ensure all work experiences have both start and end dates.";
const ADD_EDUCATION: &str = "Include your educational background.";
const ADD_SUMMARY: &str = "Add a professional summary that highlights your experience and skills.";
const ADD_SKILLS: &str = "Add relevant skills to your resume, organized by categories.";
const QUANTIFY: &str =
    "Include quantifiable achievements in your work experience (e.g., 'Increased sales by 20%').";
const ACTION_VERBS: &str =
    "Start achievement bullets with strong action verbs (e.g., 'Developed', 'Implemented', 'Managed').";
const ADD_PROJECTS: &str =
    "Add relevant projects to showcase your skills, especially if you have limited work experience.";
const TAILOR: &str =
    "Your resume doesn't match many keywords from the job description. Consider tailoring it more specifically.";
const LOOKS_GREAT: &str =
    "Your resume looks great! It's well-formatted and matches the job description well.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_score: u8,
    pub keyword_match_score: u8,
    pub format_score: u8,
    pub content_score: u8,
    /// Keywords not found in the resume, in extraction order
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ScoreResult {
    /// Placeholder shown before a resume has been scored
    pub fn pending() -> Self {
        Self {
            overall_score: 0,
            keyword_match_score: 0,
            format_score: 0,
            content_score: 0,
            missing_keywords: Vec::new(),
            suggestions: vec![PENDING.to_string()],
        }
    }
}

/// Traffic-light classification of a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    Success,
    Warning,
    Danger,
}

impl ScoreLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreLevel::Success,
            60..=79 => ScoreLevel::Warning,
            _ => ScoreLevel::Danger,
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreLevel::Success => write!(f, "Good"),
            ScoreLevel::Warning => write!(f, "Needs work"),
            ScoreLevel::Danger => write!(f, "Poor"),
        }
    }
}

/// Structural checks behind the format score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChecks {
    pub has_contact_info: bool,
    pub has_experience: bool,
    pub has_proper_dates: bool,
    pub has_achievements: bool,
    pub has_education: bool,
}

impl FormatChecks {
    pub fn evaluate(resume: &ResumeRecord) -> Self {
        Self {
            has_contact_info: resume.has_contact_info(),
            has_experience: !resume.experience.is_empty(),
            has_proper_dates: resume.experience.iter().all(|exp| exp.has_dates()),
            has_achievements: resume.experience.iter().any(|exp| exp.has_leading_achievement()),
            has_education: !resume.education.is_empty(),
        }
    }

    pub fn score(&self) -> u8 {
        let mut score: i32 = 100;

        if !self.has_contact_info {
            score -= 15;
        }

        if !self.has_experience {
            score -= 20;
        } else {
            if !self.has_proper_dates {
                score -= 10;
            }
            if !self.has_achievements {
                score -= 10;
            }
        }

        if !self.has_education {
            score -= 10;
        }

        clamp_score(score)
    }

    fn suggestions(&self) -> Vec<&'static str> {
        let mut suggestions = Vec::new();

        if !self.has_contact_info {
            suggestions.push(CONTACT_INFO);
        }
        if !self.has_experience {
            suggestions.push(ADD_EXPERIENCE);
        } else if !self.has_proper_dates {
            suggestions.push(PROPER_DATES);
        }
        if !self.has_education {
            suggestions.push(ADD_EDUCATION);
        }

        suggestions
    }
}

/// Quality checks behind the content score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentChecks {
    pub has_summary: bool,
    pub has_skills: bool,
    pub has_experience: bool,
    pub has_quantifiable_achievements: bool,
    pub has_action_verbs: bool,
    /// Fewer than two jobs and no projects to make up for it
    pub lacks_projects: bool,
}

impl ContentChecks {
    pub fn score(&self) -> u8 {
        let mut score: i32 = 100;

        if !self.has_summary {
            score -= 15;
        }
        if !self.has_skills {
            score -= 15;
        }
        if self.has_experience {
            if !self.has_quantifiable_achievements {
                score -= 15;
            }
            if !self.has_action_verbs {
                score -= 10;
            }
        }
        if self.lacks_projects {
            score -= 15;
        }

        clamp_score(score)
    }

    fn suggestions(&self) -> Vec<&'static str> {
        let mut suggestions = Vec::new();

        if !self.has_summary {
            suggestions.push(ADD_SUMMARY);
        }
        if !self.has_skills {
            suggestions.push(ADD_SKILLS);
        }
        if self.has_experience {
            if !self.has_quantifiable_achievements {
                suggestions.push(QUANTIFY);
            }
            if !self.has_action_verbs {
                suggestions.push(ACTION_VERBS);
            }
        }
        if self.lacks_projects {
            suggestions.push(ADD_PROJECTS);
        }

        suggestions
    }
}

/// Keyword coverage of the resume text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub score: u8,
    pub missing_keywords: Vec<String>,
}

pub struct AtsScorer {
    quantifiable: Regex,
    action_verb: Regex,
    config: ScoringConfig,
}

impl AtsScorer {
    pub fn new(vocabulary: &Vocabulary, config: ScoringConfig) -> Result<Self> {
        let quantifiable = Regex::new(&format!("(?i){}", vocabulary.quantifiable_patterns.join("|")))
            .map_err(|e| ResumeEngineError::InvalidInput(format!("Invalid quantifiable pattern: {}", e)))?;

        let verbs: Vec<String> = vocabulary.action_verbs.iter().map(|v| regex::escape(v)).collect();
        let action_verb = Regex::new(&format!("(?i)^(?:{})", verbs.join("|")))
            .map_err(|e| ResumeEngineError::InvalidInput(format!("Invalid action verbs: {}", e)))?;

        Ok(Self {
            quantifiable,
            action_verb,
            config,
        })
    }

    /// Score a resume. Without a job description or extracted keywords the
    /// keyword component is skipped and the overall score averages format
    /// and content.
    pub fn score(&self, resume: &ResumeRecord) -> ScoreResult {
        let format = FormatChecks::evaluate(resume);
        let content = self.content_checks(resume);
        let format_score = format.score();
        let content_score = content.score();

        if !resume.has_job_description() || resume.keywords.is_empty() {
            info!("No job description or keywords; scoring format and content only");
            let overall = (f64::from(format_score) + f64::from(content_score)) / 2.0;
            return ScoreResult {
                overall_score: round_score(overall),
                keyword_match_score: 0,
                format_score,
                content_score,
                missing_keywords: Vec::new(),
                suggestions: vec![NO_JOB_DESCRIPTION.to_string()],
            };
        }

        let keyword_match = self.keyword_match(resume);
        let overall = f64::from(keyword_match.score) * self.config.keyword_weight
            + f64::from(format_score) * self.config.format_weight
            + f64::from(content_score) * self.config.content_weight;

        let mut result = ScoreResult {
            overall_score: round_score(overall),
            keyword_match_score: keyword_match.score,
            format_score,
            content_score,
            missing_keywords: keyword_match.missing_keywords,
            suggestions: Vec::new(),
        };
        result.suggestions = self.suggestions(&result, &format, &content);

        debug!(
            "ATS score {} (keywords {}, format {}, content {})",
            result.overall_score, result.keyword_match_score, result.format_score, result.content_score
        );
        result
    }

    /// Percentage of keywords found anywhere in the resume text
    pub fn keyword_match(&self, resume: &ResumeRecord) -> KeywordMatch {
        if resume.keywords.is_empty() {
            return KeywordMatch {
                score: 0,
                missing_keywords: Vec::new(),
            };
        }

        let content = resume_content(resume).to_lowercase();
        let missing_keywords: Vec<String> = resume
            .keywords
            .iter()
            .filter(|k| !content.contains(&k.to_lowercase()))
            .cloned()
            .collect();

        let matched = resume.keywords.len() - missing_keywords.len();
        let score = round_score(matched as f64 / resume.keywords.len() as f64 * 100.0);

        KeywordMatch {
            score,
            missing_keywords,
        }
    }

    pub fn content_checks(&self, resume: &ResumeRecord) -> ContentChecks {
        ContentChecks {
            has_summary: resume.summary().is_some(),
            has_skills: resume.has_skills(),
            has_experience: !resume.experience.is_empty(),
            has_quantifiable_achievements: resume
                .experience_achievements()
                .any(|a| self.is_quantified(a)),
            has_action_verbs: resume
                .experience_achievements()
                .any(|a| self.starts_with_action_verb(a)),
            lacks_projects: resume.experience.len() < 2 && resume.projects.is_empty(),
        }
    }

    pub fn is_quantified(&self, achievement: &str) -> bool {
        self.quantifiable.is_match(achievement)
    }

    pub fn starts_with_action_verb(&self, achievement: &str) -> bool {
        self.action_verb.is_match(achievement.trim())
    }

    fn suggestions(
        &self,
        result: &ScoreResult,
        format: &FormatChecks,
        content: &ContentChecks,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        match result.missing_keywords.len() {
            0 => {}
            1..=3 => suggestions.push(format!(
                "Try to incorporate these missing keywords: {}.",
                result.missing_keywords.join(", ")
            )),
            n => suggestions.push(format!(
                "You're missing {} important keywords from the job description. Try to incorporate more of them.",
                n
            )),
        }

        if result.format_score < self.config.format_suggestion_threshold {
            suggestions.extend(format.suggestions().into_iter().map(String::from));
        }

        if result.content_score < self.config.content_suggestion_threshold {
            suggestions.extend(content.suggestions().into_iter().map(String::from));
        }

        if result.keyword_match_score < self.config.keyword_suggestion_threshold {
            suggestions.push(TAILOR.to_string());
        }

        if suggestions.is_empty() {
            suggestions.push(LOOKS_GREAT.to_string());
        }

        suggestions
    }
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new(&Vocabulary::builtin(), ScoringConfig::default())
            .expect("Failed to create default ATS scorer")
    }
}

/// All searchable resume text joined with spaces
fn resume_content(resume: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = vec![
        &resume.personal_info.full_name,
        &resume.personal_info.job_title,
        resume.generated_summary.as_deref().unwrap_or(""),
    ];

    for exp in &resume.experience {
        parts.extend([exp.title.as_str(), &exp.company, &exp.description]);
        parts.extend(exp.achievements.iter().map(String::as_str));
    }

    for edu in &resume.education {
        parts.extend([edu.degree.as_str(), &edu.institution, &edu.description]);
    }

    for category in &resume.skills {
        parts.push(&category.category);
        parts.extend(category.skills.iter().map(String::as_str));
    }

    for project in &resume.projects {
        parts.extend([project.title.as_str(), &project.technologies, &project.description]);
        parts.extend(project.achievements.iter().map(String::as_str));
    }

    parts.join(" ")
}

/// Deductions are summed first and clamped once
fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
