//! Keyword extraction from job descriptions
//!
//! Two passes over the description: a vocabulary scan for known skill terms,
//! then a look at the first requirements-style paragraph for short bullet
//! phrases. Results are ordered and bounded.

use crate::config::ExtractionConfig;
use crate::error::{Result, ResumeEngineError};
use crate::processing::vocabulary::Vocabulary;
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use regex::Regex;
use std::collections::HashSet;

pub struct KeywordExtractor {
    skill_terms: Vec<String>,
    skill_matcher: AhoCorasick,
    requirements_heading: Option<Regex>,
    paragraph_break: Regex,
    bullet_marker: Regex,
    config: ExtractionConfig,
}

impl KeywordExtractor {
    pub fn new(vocabulary: &Vocabulary, config: ExtractionConfig) -> Result<Self> {
        let skill_terms: Vec<String> = vocabulary.skill_terms().map(str::to_string).collect();

        // Overlapping search needs the standard match kind; every term present
        // in the text must be reported, not just the leftmost-longest one.
        let patterns: Vec<String> = skill_terms.iter().map(|t| t.to_lowercase()).collect();
        let skill_matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| ResumeEngineError::InvalidInput(format!("Failed to build skill matcher: {}", e)))?;

        // No headings means no requirements section is ever detected
        let requirements_heading = if vocabulary.requirements_headings.is_empty() {
            None
        } else {
            let headings: Vec<String> = vocabulary
                .requirements_headings
                .iter()
                .map(|h| regex::escape(h))
                .collect();
            let heading = Regex::new(&format!("(?i){}", headings.join("|")))
                .map_err(|e| ResumeEngineError::InvalidInput(format!("Invalid requirements headings: {}", e)))?;
            Some(heading)
        };

        let paragraph_break = Regex::new(r"\r?\n[ \t]*\r?\n").expect("Invalid paragraph regex");
        let bullet_marker = Regex::new(r"^[-•*]\s*").expect("Invalid bullet regex");

        Ok(Self {
            skill_terms,
            skill_matcher,
            requirements_heading,
            paragraph_break,
            bullet_marker,
            config,
        })
    }

    /// Extract up to `max_keywords` keywords: vocabulary hits first (in
    /// vocabulary order), then requirement phrases (in document order).
    pub fn extract(&self, job_description: &str) -> Vec<String> {
        if job_description.trim().is_empty() {
            return Vec::new();
        }

        let mut keywords = self.match_vocabulary(job_description);
        keywords.extend(self.requirement_phrases(job_description));
        keywords.truncate(self.config.max_keywords);

        debug!("Extracted {} keywords from job description", keywords.len());
        keywords
    }

    /// Vocabulary terms contained anywhere in the text, case-insensitively
    pub fn match_vocabulary(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let found: HashSet<usize> = self
            .skill_matcher
            .find_overlapping_iter(&lowered)
            .map(|mat| mat.pattern().as_usize())
            .collect();

        let mut matches: Vec<String> = Vec::new();
        for (index, term) in self.skill_terms.iter().enumerate() {
            if found.contains(&index) && !matches.contains(term) {
                matches.push(term.clone());
            }
        }
        matches
    }

    /// The first blank-line separated paragraph that looks like a
    /// requirements or qualifications section
    pub fn requirements_section<'a>(&self, text: &'a str) -> Option<&'a str> {
        let heading = self.requirements_heading.as_ref()?;
        self.paragraph_break
            .split(text)
            .find(|section| heading.is_match(section))
    }

    /// Short bullet lines from the requirements section
    pub fn requirement_phrases(&self, text: &str) -> Vec<String> {
        let Some(section) = self.requirements_section(text) else {
            return Vec::new();
        };

        let mut phrases: Vec<String> = Vec::new();
        for line in section.lines() {
            let phrase = self.bullet_marker.replace(line.trim(), "").to_string();
            if phrase.chars().count() <= self.config.min_phrase_chars || phrases.contains(&phrase) {
                continue;
            }

            let words = phrase.split_whitespace().count();
            if (self.config.min_phrase_words..=self.config.max_phrase_words).contains(&words) {
                phrases.push(phrase);
            }
        }
        phrases
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(&Vocabulary::builtin(), ExtractionConfig::default())
            .expect("Failed to create default keyword extractor")
    }
}
