//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::ats_scorer::ScoreLevel;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for the requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn level_color(level: ScoreLevel) -> Color {
    match level {
        ScoreLevel::Success => Color::Green,
        ScoreLevel::Warning => Color::Yellow,
        ScoreLevel::Danger => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let level = ScoreLevel::from_score(score);
        let badge = level.to_string().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(level_color(level)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_score_line(&self, label: &str, score: u8) -> String {
        format!("  {:<16}{:>3}% {}\n", label, score, self.format_score_badge(score))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let score = &report.score;

        output.push_str(&self.format_header("ATS COMPATIBILITY REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Vocabulary: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.vocabulary_version
        ));

        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&self.format_score_line("Overall", score.overall_score));
        output.push_str(&self.format_score_line("Keyword match", score.keyword_match_score));
        output.push_str(&self.format_score_line("Format", score.format_score));
        output.push_str(&self.format_score_line("Content", score.content_score));
        output.push_str(&format!(
            "\nVerdict: {}\n",
            self.colorize(report.verdict(), level_color(report.level()))
        ));

        if self.detailed {
            output.push_str(&self.format_header("Generated Summary", 2));
            output.push_str(&format!("{}\n", report.summary));

            output.push_str(&self.format_header("Keywords", 2));
            if report.keywords.is_empty() {
                output.push_str("  (none extracted)\n");
            }
            for keyword in &report.keywords {
                if score.missing_keywords.contains(keyword) {
                    output.push_str(&format!("  {} {}\n", self.colorize("✗", Color::Red), keyword));
                } else {
                    output.push_str(&format!("  {} {}\n", self.colorize("✓", Color::Green), keyword));
                }
            }
        } else if !score.missing_keywords.is_empty() {
            output.push_str(&self.format_header("Missing Keywords", 3));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&score.missing_keywords.join(", "), Color::Yellow)
            ));
        }

        output.push_str(&self.format_header("Suggestions", 2));
        for (i, suggestion) in score.suggestions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match ScoreLevel::from_score(score) {
            ScoreLevel::Success => "🟢 Good",
            ScoreLevel::Warning => "🟡 Needs work",
            ScoreLevel::Danger => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let score = &report.score;

        output.push_str("# ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Vocabulary:** `{}`\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.vocabulary_version
            ));
        }

        output.push_str("## Scores\n\n");
        output.push_str("| Component | Score | Rating |\n");
        output.push_str("|-----------|-------|--------|\n");
        for (label, value) in [
            ("**Overall**", score.overall_score),
            ("Keyword match", score.keyword_match_score),
            ("Format", score.format_score),
            ("Content", score.content_score),
        ] {
            output.push_str(&format!(
                "| {} | {}% | {} |\n",
                label,
                value,
                Self::markdown_score_badge(value)
            ));
        }
        output.push_str(&format!("\n**Verdict:** {}\n\n", report.verdict()));

        output.push_str("## Professional Summary\n\n");
        output.push_str(&format!("> {}\n\n", report.summary));

        output.push_str("## Keywords\n\n");
        if report.keywords.is_empty() {
            output.push_str("_No keywords extracted._\n\n");
        } else {
            for keyword in &report.keywords {
                let mark = if score.missing_keywords.contains(keyword) { " " } else { "x" };
                output.push_str(&format!("- [{}] {}\n", mark, keyword));
            }
            output.push('\n');
        }

        output.push_str("## Suggestions\n\n");
        for (i, suggestion) in score.suggestions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// `<resume stem>_ats.<ext>`, optionally timestamped
pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}
