//! The five fixed scoring categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sections required for full marks on structure.
pub const SECTION_THRESHOLD: usize = 4;
/// Keyword matches required for full marks on experience and skills.
pub const SKILLS_THRESHOLD: usize = 5;

pub const STRUCTURE_PENALTY: f64 = 0.7;
pub const SKILLS_PENALTY: f64 = 0.7;
pub const FRIENDLINESS_PENALTY: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    KeywordOptimization,
    FormattingStructure,
    ExperienceSkillsMatch,
    GrammarSpelling,
    AtsFriendliness,
}

impl Criterion {
    /// Report order.
    pub const ALL: [Criterion; 5] = [
        Criterion::KeywordOptimization,
        Criterion::FormattingStructure,
        Criterion::ExperienceSkillsMatch,
        Criterion::GrammarSpelling,
        Criterion::AtsFriendliness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::KeywordOptimization => "Keyword Optimization",
            Criterion::FormattingStructure => "Formatting & Structure",
            Criterion::ExperienceSkillsMatch => "Work Experience & Skills Match",
            Criterion::GrammarSpelling => "Grammar & Spelling",
            Criterion::AtsFriendliness => "Overall ATS Friendliness",
        }
    }

    pub fn max_weight(&self) -> f64 {
        20.0
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sum of all criterion weights.
pub fn total_weight() -> f64 {
    Criterion::ALL.iter().map(|c| c.max_weight()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one_hundred() {
        assert_eq!(total_weight(), 100.0);
    }

    #[test]
    fn test_report_order() {
        let names: Vec<&str> = Criterion::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Keyword Optimization",
                "Formatting & Structure",
                "Work Experience & Skills Match",
                "Grammar & Spelling",
                "Overall ATS Friendliness",
            ]
        );
    }
}
