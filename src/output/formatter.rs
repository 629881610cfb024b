//! Output formatters: console table, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{AtsScorerError, Result};
use crate::output::report::{CriterionResult, Report};
use crate::processing::matcher::TermMatches;
use colored::{Color, Colorize};
use std::path::Path;

pub const REPORT_TITLE: &str = "=== ATS Resume Analysis ===";

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Aligned text table, optionally coloured
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    detailed: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(result: &CriterionResult) -> Color {
        match result.ratio() {
            r if r >= 1.0 => Color::Green,
            r if r >= 0.7 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_verdict(&self, report: &Report) -> String {
        let color = match report.verdict() {
            "EXCELLENT" => Color::Green,
            "GOOD" => Color::BrightGreen,
            "FAIR" => Color::Yellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", report.verdict().color(color).bold())
        } else {
            format!("[{}]", report.verdict())
        }
    }

    fn format_terms(&self, label: &str, matches: &TermMatches) -> String {
        let mut output = format!("{} ({}/{})\n", label, matches.found_count(), matches.total());
        if !matches.found.is_empty() {
            output.push_str(&format!(
                "  found:   {}\n",
                self.colorize(&matches.found.join(", "), Color::Green)
            ));
        }
        if !matches.missing.is_empty() {
            output.push_str(&format!(
                "  missing: {}\n",
                self.colorize(&matches.missing.join(", "), Color::Red)
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&self.colorize(REPORT_TITLE, Color::Blue));
        output.push_str("\n\n");

        let name_width = report
            .results
            .iter()
            .map(|r| r.name.chars().count())
            .chain(std::iter::once("Criteria".len()))
            .max()
            .unwrap_or(0);
        let score_width = "Score".len().max(6);

        // Pad before colouring so escape codes don't skew the columns
        output.push_str(&format!(
            "{:<name_width$}  {:>score_width$}  {}\n",
            "Criteria", "Score", "Feedback"
        ));
        output.push_str(&format!(
            "{}  {}  {}\n",
            "-".repeat(name_width),
            "-".repeat(score_width),
            "-".repeat("Feedback".len())
        ));

        for result in &report.results {
            let score = format!("{:>score_width$.2}", result.score);
            output.push_str(&format!(
                "{:<name_width$}  {}  {}\n",
                result.name,
                self.colorize(&score, Self::score_color(result)),
                result.feedback
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "Total ATS Score: {:.2} / {:.0} {}\n",
            report.total_score,
            report.max_total,
            self.format_verdict(report)
        ));

        if self.detailed {
            output.push('\n');
            output.push_str(&self.format_terms("Keywords", &report.breakdown.keywords));
            output.push_str(&self.format_terms("Sections", &report.breakdown.sections));
            output.push_str(&self.format_terms("Profile links", &report.breakdown.profile_links));

            if let Some(metadata) = &report.metadata {
                output.push_str(&format!(
                    "\nSource: {} ({}, {} characters)\n",
                    metadata.source_file, metadata.file_type, metadata.character_count
                ));
            }
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
    fn format_report(&self, report: &Report) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn term_line(label: &str, matches: &TermMatches) -> String {
        let missing = if matches.missing.is_empty() {
            "none".to_string()
        } else {
            matches.missing.join(", ")
        };
        format!(
            "- **{}:** {}/{} found (missing: {})\n",
            label,
            matches.found_count(),
            matches.total(),
            missing
        )
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", REPORT_TITLE));

        if let Some(metadata) = &report.metadata {
            output.push_str(&format!(
                "**Resume:** `{}` | **Generated:** {}\n\n",
                metadata.source_file,
                metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        output.push_str("| Criteria | Score | Feedback |\n");
        output.push_str("|----------|------:|----------|\n");
        for result in &report.results {
            output.push_str(&format!(
                "| {} | {:.2} | {} |\n",
                Self::escape_cell(&result.name),
                result.score,
                Self::escape_cell(&result.feedback)
            ));
        }

        output.push_str(&format!(
            "\n**Total ATS Score:** {:.2} / {:.0} ({})\n",
            report.total_score,
            report.max_total,
            report.verdict()
        ));

        if self.detailed {
            output.push_str("\n## Match Breakdown\n\n");
            output.push_str(&Self::term_line("Keywords", &report.breakdown.keywords));
            output.push_str(&Self::term_line("Sections", &report.breakdown.sections));
            output.push_str(&Self::term_line(
                "Profile links",
                &report.breakdown.profile_links,
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
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
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content).map_err(|e| {
        AtsScorerError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}
