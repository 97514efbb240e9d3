//! Text analysis: keyword extraction, summary generation and ATS scoring

pub mod ats_scorer;
pub mod dates;
pub mod engine;
pub mod keyword_extractor;
pub mod summary_generator;
pub mod vocabulary;
