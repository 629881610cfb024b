//! Whole-word, case-insensitive term matching

use crate::error::{AtsScorerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A fixed list of literal terms, each compiled to `(?i)\b<term>\b`.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<(String, Regex)>,
}

/// Terms split by whether they occur in a text, each side in list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermMatches {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl TermMatches {
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }
}

impl TermMatcher {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self> {
        let terms = terms
            .iter()
            .map(|term| {
                let term = term.as_ref().trim();
                // Escaped, so `github.com` never matches `github-com` or `githubXcom`
                let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
                Regex::new(&pattern)
                    .map(|re| (term.to_string(), re))
                    .map_err(|e| {
                        AtsScorerError::Configuration(format!("Invalid term '{}': {}", term, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { terms })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.terms.iter().filter(|(_, re)| re.is_match(text)).count()
    }

    pub fn all_present(&self, text: &str) -> bool {
        self.terms.iter().all(|(_, re)| re.is_match(text))
    }

    pub fn partition(&self, text: &str) -> TermMatches {
        let mut matches = TermMatches::default();
        for (term, re) in &self.terms {
            if re.is_match(text) {
                matches.found.push(term.clone());
            } else {
                matches.missing.push(term.clone());
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let matcher = TermMatcher::new(&["AWS"]).unwrap();
        assert_eq!(matcher.count_matches("aws"), 1);
        assert_eq!(matcher.count_matches("AWS"), 1);
        assert_eq!(matcher.count_matches("Aws"), 1);
    }

    #[test]
    fn test_whole_word_only() {
        let matcher = TermMatcher::new(&["AWS", "SQL"]).unwrap();
        assert_eq!(matcher.count_matches("AWStronaut and MySQLish"), 0);
        assert_eq!(matcher.count_matches("(AWS), SQL."), 2);
    }

    #[test]
    fn test_dotted_terms_are_literal() {
        let matcher = TermMatcher::new(&["github.com"]).unwrap();
        assert!(matcher.all_present("https://github.com/jane"));
        assert!(!matcher.all_present("githubXcom"));
        assert!(!matcher.all_present("github-com"));
        assert!(!matcher.all_present("mygithub.com"));
    }

    #[test]
    fn test_partition_keeps_list_order() {
        let matcher = TermMatcher::new(&["Linux", "Cloud", "Python"]).unwrap();
        let matches = matcher.partition("python on linux");
        assert_eq!(matches.found, vec!["Linux", "Python"]);
        assert_eq!(matches.missing, vec!["Cloud"]);
        assert_eq!(matches.total(), 3);
    }

    #[test]
    fn test_empty_list_is_trivially_present() {
        let matcher = TermMatcher::new::<&str>(&[]).unwrap();
        assert!(matcher.is_empty());
        assert!(matcher.all_present(""));
    }
}
