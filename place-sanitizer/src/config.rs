//! Configuration management for `place-sanitizer`.
//!
//! This module defines the data structures a sanitizer is built from:
//!
//! * [`RuleEntry`]: one raw entry of the `sanitizers:` list, as read from YAML.
//! * [`TokenizerRules`]: the part of a tokenizer configuration holding that list.
//! * [`StepConfig`]: the options of one step, with typed accessors for factories.
//! * [`Configuration`]: the process-wide settings handed through to every factory.
//!
//! License: GPL-3.0-or-later

use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yml::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::SanitizerError;

/// Name of the field that selects the step implementation of a rule entry.
pub const STEP_KEY: &str = "step";

/// One entry of the sanitizer list: the `step` field plus step-specific options.
pub type RuleEntry = BTreeMap<String, Value>;

/// The sanitizer section of a tokenizer configuration file.
///
/// ```yaml
/// sanitizers:
///   - step: split-name-list
///     delimiters: ";,"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenizerRules {
    pub sanitizers: Option<Vec<RuleEntry>>,
}

impl TokenizerRules {
    /// Loads the rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitizer rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tokenizer config {}", path.display()))?;
        let rules = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse tokenizer config {}", path.display()))?;

        info!(
            "Loaded {} sanitizer rules from file {}.",
            rules.sanitizers().map_or(0, <[RuleEntry]>::len),
            path.display()
        );
        Ok(rules)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let rules: TokenizerRules =
            serde_yml::from_str(text).context("Invalid YAML in sanitizer rules")?;
        Ok(rules)
    }

    /// The configured rule entries, `None` if the section is absent.
    pub fn sanitizers(&self) -> Option<&[RuleEntry]> {
        self.sanitizers.as_deref()
    }
}

/// Process-wide settings passed unmodified to every step factory.
///
/// The sanitizer itself never looks inside; it only hands the context on to
/// steps that need shared settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    settings: BTreeMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Reads settings from a flat YAML mapping of strings.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Configuration =
            serde_yml::from_str(text).context("Invalid YAML in configuration")?;
        debug!("Parsed {} configuration settings.", config.settings.len());
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Options of a single sanitizer step, without the `step` field itself.
///
/// The accessors reject malformed values with
/// [`SanitizerError::InvalidOption`], so factories can simply use `?`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConfig {
    step: String,
    options: BTreeMap<String, Value>,
}

impl StepConfig {
    pub fn new(step: impl Into<String>, options: BTreeMap<String, Value>) -> Self {
        Self {
            step: step.into(),
            options,
        }
    }

    /// Identifier of the step these options belong to.
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Raw access to an option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    fn invalid(&self, message: String) -> SanitizerError {
        SanitizerError::invalid_option(self.step.clone(), message)
    }

    /// Returns a string option, or `default` if it is not set.
    pub fn get_string(&self, key: &str, default: &str) -> Result<String, SanitizerError> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(self.invalid(format!("Parameter '{key}' must be a string."))),
        }
    }

    /// Returns a boolean option, or `default` if it is not set.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, SanitizerError> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.invalid(format!(
                "Parameter '{key}' must be a boolean value (true or false)."
            ))),
        }
    }

    /// Returns a list of strings. A single string counts as a one-element list.
    pub fn get_string_list(&self, key: &str, default: &[&str]) -> Result<Vec<String>, SanitizerError> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(default.iter().map(|s| s.to_string()).collect()),
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        self.invalid(format!("Parameter '{key}' must be a list of strings."))
                    })
                })
                .collect(),
            Some(_) => Err(self.invalid(format!(
                "Parameter '{key}' must be a string or a list of strings."
            ))),
        }
    }

    /// Builds a regex that splits a value on any of the delimiter characters
    /// given in option `key` (or `default`). Whitespace around a delimiter
    /// belongs to the delimiter.
    pub fn get_delimiter(&self, key: &str, default: &str) -> Result<Regex, SanitizerError> {
        let delimiters = self.get_string(key, default)?;
        if delimiters.is_empty() {
            return Err(self.invalid(format!(
                "Config parameter '{key}' has no delimiter characters."
            )));
        }

        let pattern = format!(r"\s*[{}]\s*", regex::escape(&delimiters));
        debug!("Step '{}': delimiter pattern {:?}", self.step, pattern);
        Regex::new(&pattern)
            .map_err(|e| self.invalid(format!("Invalid delimiters in '{key}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_config(yaml: &str) -> StepConfig {
        let options: BTreeMap<String, Value> = serde_yml::from_str(yaml).unwrap();
        StepConfig::new("test-step", options)
    }

    #[test]
    fn test_get_string_with_default() {
        let config = step_config("mode: strict");
        assert_eq!(config.get_string("mode", "lenient").unwrap(), "strict");
        assert_eq!(config.get_string("other", "lenient").unwrap(), "lenient");
    }

    #[test]
    fn test_get_string_rejects_sequences() {
        let config = step_config("mode: [a, b]");
        let err = config.get_string("mode", "").unwrap_err();
        assert!(matches!(err, SanitizerError::InvalidOption { ref step, .. } if step == "test-step"));
    }

    #[test]
    fn test_get_bool() {
        let config = step_config("enabled: true\nbroken: maybe");
        assert!(config.get_bool("enabled", false).unwrap());
        assert!(!config.get_bool("missing", false).unwrap());
        assert!(config.get_bool("broken", false).is_err());
    }

    #[test]
    fn test_get_string_list_accepts_single_string() {
        let config = step_config("single: name\nmany: [name, ref]\nbad: [1, 2]");
        assert_eq!(config.get_string_list("single", &[]).unwrap(), vec!["name"]);
        assert_eq!(config.get_string_list("many", &[]).unwrap(), vec!["name", "ref"]);
        assert_eq!(config.get_string_list("missing", &["x"]).unwrap(), vec!["x"]);
        assert!(config.get_string_list("bad", &[]).is_err());
    }

    #[test]
    fn test_get_delimiter_splits_and_strips() {
        let config = step_config("delimiters: ',;'");
        let regex = config.get_delimiter("delimiters", ";").unwrap();
        let parts: Vec<&str> = regex.split("a , b;c").collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_delimiter_escapes_regex_characters() {
        let config = step_config("delimiters: '-]'");
        let regex = config.get_delimiter("delimiters", ";").unwrap();
        let parts: Vec<&str> = regex.split("a-b]c").collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_delimiter_rejects_empty() {
        let config = step_config("delimiters: ''");
        assert!(config.get_delimiter("delimiters", ";").is_err());
    }

    #[test]
    fn test_tokenizer_rules_from_yaml() {
        let rules = TokenizerRules::from_yaml_str(
            "sanitizers:\n  - step: split-name-list\n    delimiters: ';'\n",
        )
        .unwrap();
        let entries = rules.sanitizers().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].get(STEP_KEY).and_then(Value::as_str), Some("split-name-list"));
    }

    #[test]
    fn test_tokenizer_rules_without_section() {
        let rules = TokenizerRules::from_yaml_str("other: 1\n").unwrap();
        assert!(rules.sanitizers().is_none());
    }

    #[test]
    fn test_configuration_settings() {
        let config = Configuration::from_yaml_str("DEFAULT_LANGUAGE: de\n").unwrap();
        assert_eq!(config.get("DEFAULT_LANGUAGE"), Some("de"));
        assert_eq!(config.get("MISSING"), None);

        let empty = Configuration::from_yaml_str("").unwrap();
        assert_eq!(empty, Configuration::new());
    }
}
