//! Input manager for job description documents and resume records

use crate::error::{Result, ResumeEngineError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::resume::ResumeRecord;
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a job description from a PDF, plain text or markdown file
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        ensure_exists(path)?;

        let file_type = FileType::from_path(path);
        if !file_type.is_document() {
            return Err(ResumeEngineError::UnsupportedFormat(format!(
                "Job descriptions must be .pdf, .txt or .md: {}",
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            // Text is the only document type left
            _ => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    /// Load a structured resume record from a JSON or TOML file
    pub async fn load_resume(&self, path: &Path) -> Result<ResumeRecord> {
        ensure_exists(path)?;

        let file_type = FileType::from_path(path);
        if !file_type.is_record() {
            return Err(ResumeEngineError::UnsupportedFormat(format!(
                "Resume records must be .json or .toml: {}",
                path.display()
            )));
        }

        info!("Loading resume record: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;

        let record = match file_type {
            FileType::Toml => toml::from_str(&content).map_err(|e| {
                ResumeEngineError::InvalidInput(format!("Invalid resume '{}': {}", path.display(), e))
            })?,
            _ => serde_json::from_str(&content).map_err(|e| {
                ResumeEngineError::InvalidInput(format!("Invalid resume '{}': {}", path.display(), e))
            })?,
        };

        Ok(record)
    }

    /// Write a resume record as JSON or TOML, chosen by extension
    pub async fn save_resume(&self, record: &ResumeRecord, path: &Path) -> Result<()> {
        let content = match FileType::from_path(path) {
            FileType::Json => serde_json::to_string_pretty(record)?,
            FileType::Toml => toml::to_string_pretty(record)
                .map_err(|e| ResumeEngineError::OutputFormatting(format!("Failed to serialize resume: {}", e)))?,
            _ => {
                return Err(ResumeEngineError::UnsupportedFormat(format!(
                    "Resume records must be .json or .toml: {}",
                    path.display()
                )));
            }
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
        info!("Saved resume record to {}", path.display());
        Ok(())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ResumeEngineError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )))
    }
}
