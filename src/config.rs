//! Configuration management for the ATS resume scorer

use crate::error::{AtsScorerError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Term lists the scorer searches for. Weights and thresholds are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub keywords: Vec<String>,
    pub sections: Vec<String>,
    pub profile_links: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keywords: to_strings(&[
                "AWS",
                "Python",
                "DevOps",
                "Cloud",
                "Security",
                "Automation",
                "Linux",
                "SQL",
            ]),
            sections: to_strings(&[
                "education",
                "experience",
                "skills",
                "projects",
                "certifications",
            ]),
            profile_links: to_strings(&["github.com", "linkedin.com"]),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load from `explicit` if given, else from the user config file if it
    /// exists, else fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AtsScorerError::Configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AtsScorerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            AtsScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.scoring.keywords.is_empty() {
            return Err(AtsScorerError::Configuration(
                "scoring.keywords must contain at least one keyword".to_string(),
            ));
        }
        let lists = [
            ("keywords", &self.scoring.keywords),
            ("sections", &self.scoring.sections),
            ("profile_links", &self.scoring.profile_links),
        ];
        for (name, terms) in lists {
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(AtsScorerError::Configuration(format!(
                    "scoring.{} contains a blank entry",
                    name
                )));
            }
        }
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ats-resume-scorer").join("config.toml"))
    }
}
