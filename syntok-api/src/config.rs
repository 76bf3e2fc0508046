//! High-level configuration API
//!
//! Only the hyphen and apostrophe tables are configurable; every other
//! classification rule is fixed and takes priority over them.

use crate::error::{ApiError, Result};
use serde::Deserialize;
use std::path::Path;
use syntok_core::domain::{classify_fixed, APOSTROPHES, HYPHENS};
use syntok_core::TableClassifier;

/// Hyphen and apostrophe tables used to classify characters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Characters treated as hyphens
    pub hyphens: Vec<char>,
    /// Characters treated as apostrophes
    pub apostrophes: Vec<char>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hyphens: HYPHENS.to_vec(),
            apostrophes: APOSTROPHES.to_vec(),
        }
    }
}

impl ClassifierConfig {
    fn validate(&self) -> Result<()> {
        for (table, chars) in [("hyphens", &self.hyphens), ("apostrophes", &self.apostrophes)] {
            for &ch in chars {
                if let Some(group) = classify_fixed(ch) {
                    return Err(ApiError::Config(format!(
                        "{ch:?} in {table} is always classified as {group:?}"
                    )));
                }
            }
        }

        if let Some(ch) = self.hyphens.iter().find(|ch| self.apostrophes.contains(ch)) {
            return Err(ApiError::Config(format!(
                "{ch:?} is listed as both a hyphen and an apostrophe"
            )));
        }

        Ok(())
    }
}

/// High-level configuration for tokenization
///
/// Loadable from TOML:
///
/// ```toml
/// [classifier]
/// hyphens = ["-", "_", "‐"]
/// apostrophes = ["'", "’"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Character classification tables
    pub classifier: ClassifierConfig,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(
            hyphens = config.classifier.hyphens.len(),
            apostrophes = config.classifier.apostrophes.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading configuration file");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check the classifier tables
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()
    }

    /// Build the classifier described by this configuration
    pub fn classifier(&self) -> TableClassifier {
        TableClassifier::new(
            self.classifier.hyphens.iter().copied(),
            self.classifier.apostrophes.iter().copied(),
        )
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Replace the hyphen table
    pub fn hyphens(mut self, hyphens: impl IntoIterator<Item = char>) -> Self {
        self.config.classifier.hyphens = hyphens.into_iter().collect();
        self
    }

    /// Replace the apostrophe table
    pub fn apostrophes(mut self, apostrophes: impl IntoIterator<Item = char>) -> Self {
        self.config.classifier.apostrophes = apostrophes.into_iter().collect();
        self
    }

    /// Add one character to the hyphen table
    pub fn extra_hyphen(mut self, ch: char) -> Self {
        if !self.config.classifier.hyphens.contains(&ch) {
            self.config.classifier.hyphens.push(ch);
        }
        self
    }

    /// Add one character to the apostrophe table
    pub fn extra_apostrophe(mut self, ch: char) -> Self {
        if !self.config.classifier.apostrophes.contains(&ch) {
            self.config.classifier.apostrophes.push(ch);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
