//! Configuration system for benchreport.
//!
//! Load report settings from TOML or YAML files so recurring report runs
//! don't need long command lines. Every field is optional; command-line flags
//! take precedence over the file, and the file over built-in defaults.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use benchreport::{Category, OutputFormat};
//! use benchreport_config::ReportConfig;
//!
//! let config = ReportConfig::from_toml_str(r#"
//!     input = "build/bench.json"
//!     format = "markdown"
//!     title = "Nightly Benchmarks"
//!
//!     [[rules]]
//!     category = "network"
//!     contains = ["Socket", "Rpc"]
//! "#).unwrap();
//!
//! assert_eq!(config.format, Some(OutputFormat::Markdown));
//! let classifier = config.classifier().unwrap();
//! assert_eq!(classifier.category_of("BM_SocketRead"), Category::Network);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use benchreport_config::ReportConfig;
//!
//! let config = ReportConfig::load("benchreport.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use benchreport::{Category, CategoryRule, Classifier, OutputFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Report configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ReportConfig {
    /// Benchmark results to read.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Where to write the report.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Output document format.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Report title.
    #[serde(default)]
    pub title: Option<String>,

    /// Classification table replacing the built-in one, in priority order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl ReportConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the input path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a classification rule.
    pub fn with_rule(mut self, rule: RuleConfig) -> Self {
        self.rules.push(rule);
        self
    }

    /// Checks that every rule has at least one non-empty pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.contains.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "rule #{} ({}) has no patterns",
                    index, rule.category
                )));
            }
            if rule.contains.iter().any(String::is_empty) {
                return Err(ConfigError::Invalid(format!(
                    "rule #{} ({}) has an empty pattern",
                    index, rule.category
                )));
            }
        }
        Ok(())
    }

    /// Builds the classifier, falling back to the built-in rules when the
    /// configuration defines none.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a rule is unusable.
    pub fn classifier(&self) -> Result<Classifier, ConfigError> {
        self.validate()?;
        if self.rules.is_empty() {
            return Ok(Classifier::default());
        }
        Ok(Classifier::new(
            self.rules.iter().map(RuleConfig::to_rule).collect(),
        ))
    }
}

/// One classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleConfig {
    /// Category assigned to matching benchmarks.
    pub category: Category,

    /// Case-sensitive substrings, any of which selects this rule.
    #[serde(default)]
    pub contains: Vec<String>,
}

impl RuleConfig {
    /// Creates a rule configuration.
    pub fn new<I, S>(category: Category, contains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            contains: contains.into_iter().map(Into::into).collect(),
        }
    }

    fn to_rule(&self) -> CategoryRule {
        CategoryRule::new(self.category, self.contains.iter().cloned())
    }
}
