//! Report structures produced by the scorer

use crate::input::file_detector::FileType;
use crate::input::manager::ExtractedDocument;
use crate::processing::criteria::Criterion;
use crate::processing::matcher::TermMatches;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome for one criterion. `score` is already rounded to two decimals
/// and lies within `[0, max_score]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub name: String,
    pub score: f64,
    pub max_score: f64,
    pub feedback: String,
}

/// Which terms were found, per list. Informational only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub keywords: TermMatches,
    pub sections: TermMatches,
    pub profile_links: TermMatches,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub source_file: String,
    pub file_type: FileType,
    pub character_count: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub results: Vec<CriterionResult>,
    /// Sum of the rounded sub-scores.
    pub total_score: f64,
    pub max_total: f64,
    pub breakdown: MatchBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReportMetadata>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl CriterionResult {
    pub fn new(criterion: Criterion, score: f64, feedback: impl Into<String>) -> Self {
        let max_score = criterion.max_weight();
        Self {
            criterion,
            name: criterion.name().to_string(),
            score: round2(score.clamp(0.0, max_score)),
            max_score,
            feedback: feedback.into(),
        }
    }

    /// Fraction of the maximum achieved, 0.0 to 1.0.
    pub fn ratio(&self) -> f64 {
        if self.max_score > 0.0 {
            self.score / self.max_score
        } else {
            0.0
        }
    }
}

impl Report {
    pub fn new(results: Vec<CriterionResult>, breakdown: MatchBreakdown) -> Self {
        let total_score = round2(results.iter().map(|r| r.score).sum());
        let max_total = results.iter().map(|r| r.max_score).sum();
        Self {
            results,
            total_score,
            max_total,
            breakdown,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, document: &ExtractedDocument) -> Self {
        self.metadata = Some(ReportMetadata {
            source_file: document
                .path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| document.path.display().to_string()),
            file_type: document.file_type,
            character_count: document.text.chars().count(),
            generated_at: Utc::now(),
        });
        self
    }

    pub fn result(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.results.iter().find(|r| r.criterion == criterion)
    }

    /// Qualitative label for the total score.
    pub fn verdict(&self) -> &'static str {
        match self.total_score {
            s if s >= 90.0 => "EXCELLENT",
            s if s >= 75.0 => "GOOD",
            s if s >= 60.0 => "FAIR",
            _ => "NEEDS WORK",
        }
    }
}
