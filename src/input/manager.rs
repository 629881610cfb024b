//! Input manager: validates the resume path and routes it to an extractor

use crate::error::{AtsScorerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::info;
use std::path::{Path, PathBuf};

/// Text pulled from a resume file, plus where it came from.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub path: PathBuf,
    pub file_type: FileType,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_text(&self, path: &Path) -> Result<String> {
        Ok(self.extract_document(path)?.text)
    }

    /// Existence is checked before the extension, and both before any
    /// bytes are read.
    pub fn extract_document(&self, path: &Path) -> Result<ExtractedDocument> {
        if !path.exists() {
            return Err(AtsScorerError::FileNotFound(path.to_path_buf()));
        }

        let file_type = FileType::from_path(path);
        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path)?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path)?
            }
            FileType::Unknown => {
                return Err(AtsScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        info!("Extracted {} characters", text.chars().count());

        Ok(ExtractedDocument {
            path: path.to_path_buf(),
            file_type,
            text,
        })
    }
}
