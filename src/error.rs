//! Error handling for the ATS resume scorer

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Document extraction error: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl AtsScorerError {
    /// One-line message shown to the user before the run aborts.
    pub fn user_message(&self) -> String {
        match self {
            AtsScorerError::FileNotFound(_) => {
                "File not found! Please enter a valid file path.".to_string()
            }
            AtsScorerError::UnsupportedFormat(_) => {
                "Invalid file format! Please upload a PDF or DOCX resume.".to_string()
            }
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, AtsScorerError>;
