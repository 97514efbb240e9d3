//! Versioned reference vocabulary used by the analysis components
//!
//! The built-in `en-v1` tables can be replaced wholesale by a TOML or JSON
//! file with the same shape, which is how locale or domain specific word
//! lists are plugged in without touching the algorithms.

use crate::error::{Result, ResumeEngineError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const BUILTIN_VERSION: &str = "en-v1";

const TECHNICAL_SKILLS: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Angular", "Vue", "Node.js", "Express", "Next.js",
    "Python", "Django", "Flask", "Java", "Spring", "C#", ".NET", "PHP", "Laravel", "Ruby",
    "Rails", "Go", "Rust", "Swift", "Kotlin", "SQL", "MySQL", "PostgreSQL", "MongoDB",
    "Firebase", "AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD", "Git", "GitHub",
    "GitLab", "Bitbucket", "REST API", "GraphQL", "HTML", "CSS", "Sass", "LESS",
    "Tailwind", "Bootstrap", "Material UI", "Redux", "MobX", "Zustand", "Webpack", "Vite",
    "Rollup", "Jest", "Mocha", "Cypress", "Selenium", "Agile", "Scrum", "Kanban", "Jira",
    "Confluence", "Figma", "Sketch", "Adobe XD", "Photoshop", "Illustrator", "UI/UX",
    "Responsive Design", "Mobile Development", "iOS", "Android", "React Native", "Flutter",
    "Xamarin", "Unity", "Machine Learning", "AI", "Data Science", "TensorFlow", "PyTorch",
    "NLP", "Computer Vision", "DevOps", "SRE", "Linux", "Unix", "Shell Scripting", "Bash",
    "PowerShell", "Networking", "Security", "Blockchain", "Ethereum", "Solidity",
    "Smart Contracts", "Web3", "NFT",
];

const SOFT_SKILLS: &[&str] = &[
    "Communication", "Teamwork", "Problem Solving", "Critical Thinking", "Creativity",
    "Leadership", "Time Management", "Adaptability", "Flexibility", "Organization",
    "Attention to Detail", "Analytical Skills", "Decision Making", "Conflict Resolution",
    "Emotional Intelligence", "Interpersonal Skills", "Negotiation", "Persuasion",
    "Presentation", "Public Speaking", "Customer Service", "Project Management",
    "Multitasking", "Self-Motivation", "Work Ethic", "Collaboration", "Initiative",
    "Patience", "Persistence", "Resilience", "Stress Management",
];

const REQUIREMENTS_HEADINGS: &[&str] = &[
    "requirements", "qualifications", "what you'll need", "what we're looking for", "skills",
    "experience required",
];

const ACTION_VERBS: &[&str] = &[
    "developed", "created", "implemented", "managed", "led", "designed", "built", "launched",
    "achieved", "improved", "increased", "decreased", "reduced", "negotiated", "coordinated",
    "organized",
];

// Regex fragments; any one matching anywhere marks an achievement as quantified
const QUANTIFIABLE_PATTERNS: &[&str] = &[
    r"\d+%", r"\d+x", r"\$\d+", r"\d+ percent", "increased", "decreased", "improved", "reduced",
    "generated", "saved", "delivered",
];

/// One rung of the degree ladder; a higher `rank` wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationTier {
    pub name: String,
    pub rank: u8,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub version: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub requirements_headings: Vec<String>,
    pub action_verbs: Vec<String>,
    pub quantifiable_patterns: Vec<String>,
    /// Ordered from the highest rank down
    pub education_tiers: Vec<EducationTier>,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|s| s.to_string()).collect()
}

fn tier(name: &str, rank: u8, keywords: &[&str]) -> EducationTier {
    EducationTier {
        name: name.to_string(),
        rank,
        keywords: owned(keywords),
    }
}

impl Vocabulary {
    /// The built-in English vocabulary
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_VERSION.to_string(),
            technical_skills: owned(TECHNICAL_SKILLS),
            soft_skills: owned(SOFT_SKILLS),
            requirements_headings: owned(REQUIREMENTS_HEADINGS),
            action_verbs: owned(ACTION_VERBS),
            quantifiable_patterns: owned(QUANTIFIABLE_PATTERNS),
            education_tiers: vec![
                tier("doctorate", 5, &["phd", "doctorate", "doctor of"]),
                tier("master", 4, &["master", "msc", "ma", "ms", "mba"]),
                tier("bachelor", 3, &["bachelor", "bs", "ba", "bsc"]),
                tier("associate", 2, &["associate", "diploma"]),
                tier("certificate", 1, &["certificate", "certification"]),
            ],
        }
    }

    /// Load a replacement vocabulary from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let vocabulary: Vocabulary = match extension.as_deref() {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(ResumeEngineError::UnsupportedFormat(format!(
                    "Vocabulary file must be .toml or .json: {}",
                    path.display()
                )))
            }
        };

        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ResumeEngineError::InvalidInput(
                "Vocabulary version must not be empty".to_string(),
            ));
        }

        if self.technical_skills.is_empty() && self.soft_skills.is_empty() {
            return Err(ResumeEngineError::InvalidInput(format!(
                "Vocabulary '{}' defines no skill terms",
                self.version
            )));
        }

        if self.action_verbs.is_empty() || self.quantifiable_patterns.is_empty() {
            return Err(ResumeEngineError::InvalidInput(format!(
                "Vocabulary '{}' needs action verbs and quantifiable patterns",
                self.version
            )));
        }

        let blank_term = self
            .technical_skills
            .iter()
            .chain(&self.soft_skills)
            .chain(&self.requirements_headings)
            .chain(&self.action_verbs)
            .chain(&self.quantifiable_patterns)
            .any(|term| term.trim().is_empty());
        if blank_term {
            return Err(ResumeEngineError::InvalidInput(format!(
                "Vocabulary '{}' contains a blank term",
                self.version
            )));
        }

        Ok(())
    }

    /// Skill terms in match order: technical first, then soft
    pub fn skill_terms(&self) -> impl Iterator<Item = &str> {
        self.technical_skills
            .iter()
            .chain(&self.soft_skills)
            .map(String::as_str)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.version, "en-v1");
        assert_eq!(vocab.technical_skills.len(), 98);
        assert_eq!(vocab.soft_skills.len(), 31);
        assert_eq!(vocab.action_verbs.len(), 16);
        assert!(vocab.validate().is_ok());

        let ranks: Vec<u8> = vocab.education_tiers.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_skill_terms_order() {
        let vocab = Vocabulary::builtin();
        let terms: Vec<&str> = vocab.skill_terms().collect();
        assert_eq!(terms.first(), Some(&"JavaScript"));
        assert_eq!(terms[98], "Communication");
        assert_eq!(terms.last(), Some(&"Stress Management"));
    }

    #[test]
    fn test_validate_rejects_empty_tables() {
        let vocab = Vocabulary {
            technical_skills: Vec::new(),
            soft_skills: Vec::new(),
            ..Vocabulary::builtin()
        };
        assert!(vocab.validate().is_err());
    }

    #[test]
    fn test_from_file_toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.toml");

        let mut vocab = Vocabulary::builtin();
        vocab.version = "custom-v2".to_string();
        vocab.technical_skills = vec!["Erlang".to_string()];
        std::fs::write(&path, toml::to_string(&vocab).unwrap()).unwrap();

        let loaded = Vocabulary::from_file(&path).unwrap();
        assert_eq!(loaded, vocab);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.yaml");
        std::fs::write(&path, "version: x").unwrap();

        assert!(matches!(
            Vocabulary::from_file(&path),
            Err(ResumeEngineError::UnsupportedFormat(_))
        ));
    }
}
