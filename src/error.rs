//! Error handling for the resume engine
//!
//! The analysis calls themselves are total; these errors only surface at the
//! edges (configuration, file input, rendering).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeEngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeEngineError>;

/// Convert TOML parse errors to our custom error type
impl From<toml::de::Error> for ResumeEngineError {
    fn from(err: toml::de::Error) -> Self {
        ResumeEngineError::Configuration(format!("Failed to parse TOML: {}", err))
    }
}
