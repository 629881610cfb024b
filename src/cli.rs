//! CLI interface for the ATS resume scorer

use crate::config::OutputFormat;
use crate::error::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const PATH_PROMPT: &str = "Enter the full path of your resume (PDF or DOCX): ";

#[derive(Parser, Debug)]
#[command(name = "ats-resume-scorer")]
#[command(about = "Score a PDF or DOCX resume for ATS compatibility")]
#[command(
    long_about = "Extract the text of a resume and score it on keywords, section structure, skills coverage and profile links. Run without arguments to be prompted for the file path."
)]
pub struct Cli {
    /// Path to the resume (PDF or DOCX); prompts when omitted
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// Include matched and missing terms in the report
    #[arg(short, long)]
    pub detailed: bool,

    /// Also write the rendered report to this file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Disable coloured console output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Ask for the resume path on `output` and read one trimmed line from
/// `input`. End of input yields an empty path.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{}", PATH_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
