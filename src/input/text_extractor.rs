//! Text extraction from job description documents

use crate::error::{Result, ResumeEngineError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeEngineError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Flatten markdown to plain text. Blocks are separated by a blank line,
    /// except that a heading stays attached to the block under it and list
    /// items keep a `- ` marker, so "## Requirements" followed by a list
    /// reads as one bulleted paragraph.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut output = String::new();
        let mut list_depth = 0usize;

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::List(_)) => {
                    list_depth += 1;
                }
                Event::End(Tag::List(_)) => {
                    list_depth = list_depth.saturating_sub(1);
                    if list_depth == 0 {
                        output.push('\n');
                    }
                }
                Event::Start(Tag::Item) => {
                    if !output.is_empty() && !output.ends_with('\n') {
                        output.push('\n');
                    }
                    output.push_str("- ");
                }
                Event::End(Tag::Item) => {
                    if !output.ends_with('\n') {
                        output.push('\n');
                    }
                }
                Event::End(Tag::Heading(..)) => output.push('\n'),
                Event::End(Tag::Paragraph) if list_depth == 0 => output.push_str("\n\n"),
                Event::End(Tag::CodeBlock(_)) => output.push('\n'),
                Event::Text(text) | Event::Code(text) => output.push_str(&text),
                Event::SoftBreak if list_depth > 0 => output.push(' '),
                Event::SoftBreak | Event::HardBreak | Event::Rule => output.push('\n'),
                _ => {}
            }
        }

        output.trim_end().to_string()
    }
}
