//! Heuristic ATS scoring of resume text

use crate::config::ScoringConfig;
use crate::error::{AtsScorerError, Result};
use crate::output::report::{CriterionResult, MatchBreakdown, Report};
use crate::processing::criteria::{
    Criterion, FRIENDLINESS_PENALTY, SECTION_THRESHOLD, SKILLS_PENALTY, SKILLS_THRESHOLD,
    STRUCTURE_PENALTY,
};
use crate::processing::matcher::TermMatcher;
use log::debug;

/// Scores resume text against keyword, section and profile-link lists.
///
/// Matchers are compiled once; `score` is pure and never fails.
#[derive(Debug, Clone)]
pub struct Scorer {
    keywords: TermMatcher,
    sections: TermMatcher,
    profile_links: TermMatcher,
}

impl Scorer {
    pub fn new() -> Result<Self> {
        Self::from_config(&ScoringConfig::default())
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        if config.keywords.is_empty() {
            return Err(AtsScorerError::Configuration(
                "At least one keyword is required for scoring".to_string(),
            ));
        }

        Ok(Self {
            keywords: TermMatcher::new(&config.keywords)?,
            sections: TermMatcher::new(&config.sections)?,
            profile_links: TermMatcher::new(&config.profile_links)?,
        })
    }

    pub fn score(&self, text: &str) -> Report {
        let results = vec![
            self.keyword_optimization(text),
            self.formatting_structure(text),
            self.experience_skills_match(text),
            grammar_placeholder(),
            self.ats_friendliness(text),
        ];

        let report = Report::new(results, self.breakdown(text));
        debug!("Total ATS score: {:.2}", report.total_score);
        report
    }

    pub fn breakdown(&self, text: &str) -> MatchBreakdown {
        MatchBreakdown {
            keywords: self.keywords.partition(text),
            sections: self.sections.partition(text),
            profile_links: self.profile_links.partition(text),
        }
    }

    fn keyword_optimization(&self, text: &str) -> CriterionResult {
        let criterion = Criterion::KeywordOptimization;
        let matched = self.keywords.count_matches(text);
        let total = self.keywords.len();
        let score = matched as f64 / total as f64 * criterion.max_weight();

        CriterionResult::new(
            criterion,
            score,
            format!(
                "Found {} relevant keywords out of {}. Consider adding more role-specific keywords.",
                matched, total
            ),
        )
    }

    fn formatting_structure(&self, text: &str) -> CriterionResult {
        let criterion = Criterion::FormattingStructure;
        let found = self.sections.count_matches(text);

        if found >= SECTION_THRESHOLD {
            CriterionResult::new(
                criterion,
                criterion.max_weight(),
                "Good structure with all essential sections present.",
            )
        } else {
            CriterionResult::new(
                criterion,
                criterion.max_weight() * STRUCTURE_PENALTY,
                "Consider improving structure by adding missing sections.",
            )
        }
    }

    // Counted separately from keyword_optimization so the two criteria stay
    // independent. An empty document has no experience to credit.
    fn experience_skills_match(&self, text: &str) -> CriterionResult {
        let criterion = Criterion::ExperienceSkillsMatch;
        let found = self.keywords.count_matches(text);
        let advice = "Consider adding more relevant skills or expanding experience details.";

        if text.is_empty() {
            CriterionResult::new(criterion, 0.0, advice)
        } else if found >= SKILLS_THRESHOLD {
            CriterionResult::new(
                criterion,
                criterion.max_weight(),
                "Experience aligns well with relevant industry skills.",
            )
        } else {
            CriterionResult::new(
                criterion,
                criterion.max_weight() * SKILLS_PENALTY,
                advice,
            )
        }
    }

    fn ats_friendliness(&self, text: &str) -> CriterionResult {
        let criterion = Criterion::AtsFriendliness;

        if self.profile_links.all_present(text) {
            CriterionResult::new(
                criterion,
                criterion.max_weight(),
                "Good ATS compatibility detected.",
            )
        } else {
            CriterionResult::new(
                criterion,
                criterion.max_weight() * FRIENDLINESS_PENALTY,
                "Consider using simpler formatting for better ATS parsing.",
            )
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new().expect("Failed to build default scorer")
    }
}

/// Grammar & Spelling placeholder: always full marks, no analysis is done.
/// A real checker would replace this function only.
pub fn grammar_placeholder() -> CriterionResult {
    let criterion = Criterion::GrammarSpelling;
    CriterionResult::new(
        criterion,
        criterion.max_weight(),
        "No major spelling or grammar issues detected.",
    )
}

/// Score `text` with the built-in term lists.
pub fn score(text: &str) -> Report {
    Scorer::default().score(text)
}
