//! Structured resume record shared by every analysis step
//!
//! Field names serialize in camelCase so records exported by form-based
//! front ends load without translation. Every field defaults, so a partially
//! filled record is still a valid input.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub link: String,
    /// Free text, usually comma separated
    pub technologies: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub job_description: String,
    pub job_title: String,
    pub company: String,
    /// Written by the keyword extractor
    pub keywords: Vec<String>,
    /// Written by the summary generator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_summary: Option<String>,
}

impl Experience {
    pub fn has_dates(&self) -> bool {
        !self.start_date.trim().is_empty() && !self.end_date.trim().is_empty()
    }

    /// True when the first achievement bullet carries text
    pub fn has_leading_achievement(&self) -> bool {
        self.achievements
            .first()
            .is_some_and(|a| !a.trim().is_empty())
    }
}

impl ResumeRecord {
    pub fn has_job_description(&self) -> bool {
        !self.job_description.trim().is_empty()
    }

    /// The generated summary, if present and not blank
    pub fn summary(&self) -> Option<&str> {
        self.generated_summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn has_skills(&self) -> bool {
        self.skills.iter().any(|category| !category.skills.is_empty())
    }

    pub fn has_contact_info(&self) -> bool {
        !self.personal_info.email.trim().is_empty() && !self.personal_info.phone.trim().is_empty()
    }

    /// All skills across categories, in category order
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flat_map(|category| category.skills.iter().map(String::as_str))
    }

    /// All experience achievement bullets, in entry order
    pub fn experience_achievements(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|exp| exp.achievements.iter().map(String::as_str))
    }
}
