//! compiler.rs - Turns sanitizer rule entries into executable steps.
//!
//! Every entry is resolved upfront: the `step` field selects a factory from
//! a [`StepRegistry`] and the remaining fields become that step's options.
//! The first bad entry aborts compilation, so a sanitizer is either built
//! with its complete pipeline or not at all.
//!
//! License: GPL-3.0-or-later

use log::debug;
use serde_yml::Value;
use std::fmt;

use crate::config::{Configuration, RuleEntry, StepConfig, STEP_KEY};
use crate::errors::SanitizerError;
use crate::registry::StepRegistry;
use crate::step::SanitizerStep;

/// A single resolved step of the pipeline.
pub struct CompiledStep {
    /// The identifier the step was configured with.
    pub name: String,
    /// The executable step built by the factory.
    pub step: Box<dyn SanitizerStep>,
}

impl fmt::Debug for CompiledStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledStep")
            .field("name", &self.name)
            .field("step", &"<dyn SanitizerStep>")
            .finish()
    }
}

/// Resolves `rules` into executable steps, preserving their order.
///
/// `None` and an empty list both produce an empty pipeline.
pub fn compile_rules(
    rules: Option<&[RuleEntry]>,
    config: &Configuration,
    registry: &StepRegistry,
) -> Result<Vec<CompiledStep>, SanitizerError> {
    let rules = rules.unwrap_or_default();
    debug!("Starting compilation of {} sanitizer rules.", rules.len());

    let mut compiled = Vec::with_capacity(rules.len());

    for (index, entry) in rules.iter().enumerate() {
        let position = index + 1;
        let name = match entry.get(STEP_KEY) {
            Some(Value::String(name)) => name.as_str(),
            Some(_) => return Err(SanitizerError::InvalidStepName { position }),
            None => return Err(SanitizerError::MissingStep { position }),
        };

        let factory = registry
            .get(name)
            .ok_or_else(|| SanitizerError::UnknownStep(name.to_string()))?;

        let options = entry
            .iter()
            .filter(|(key, _)| key.as_str() != STEP_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let step = factory(&StepConfig::new(name, options), config)?;
        log::debug!(
            target: "place_sanitizer::pipeline",
            "Rule #{} resolved to step '{}'.",
            position,
            name
        );

        compiled.push(CompiledStep {
            name: name.to_string(),
            step,
        });
    }

    debug!("Finished compiling sanitizer rules. Total steps: {}.", compiled.len());
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;
    use crate::sanitizers::split_name_list;

    fn entry(yaml: &str) -> RuleEntry {
        serde_yml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_absent_and_empty_rules_compile_to_nothing() {
        let config = Configuration::new();
        let empty: Vec<RuleEntry> = Vec::new();
        assert!(compile_rules(None, &config, default_registry()).unwrap().is_empty());
        assert!(compile_rules(Some(empty.as_slice()), &config, default_registry()).unwrap().is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let rules = vec![
            entry("step: split-name-list\ndelimiters: ','"),
            entry("step: split-name-list"),
        ];
        let compiled = compile_rules(Some(rules.as_slice()), &Configuration::new(), default_registry()).unwrap();
        let names: Vec<&str> = compiled.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![split_name_list::STEP_NAME, split_name_list::STEP_NAME]);
    }

    #[test]
    fn test_missing_step_reports_position() {
        let rules = vec![entry("step: split-name-list"), entry("id: split-name-list")];
        let err = compile_rules(Some(rules.as_slice()), &Configuration::new(), default_registry()).unwrap_err();
        assert_eq!(err, SanitizerError::MissingStep { position: 2 });
    }

    #[test]
    fn test_step_must_be_a_string() {
        let rules = vec![entry("step: [split-name-list]")];
        let err = compile_rules(Some(rules.as_slice()), &Configuration::new(), default_registry()).unwrap_err();
        assert_eq!(err, SanitizerError::InvalidStepName { position: 1 });
    }

    #[test]
    fn test_unknown_step() {
        let rules = vec![entry("step: clean-housenumbers")];
        let err = compile_rules(Some(rules.as_slice()), &Configuration::new(), default_registry()).unwrap_err();
        assert_eq!(err, SanitizerError::UnknownStep("clean-housenumbers".to_string()));
    }

    #[test]
    fn test_factory_errors_abort_compilation() {
        let rules = vec![entry("step: split-name-list\ndelimiters: ''")];
        let err = compile_rules(Some(rules.as_slice()), &Configuration::new(), default_registry()).unwrap_err();
        assert!(matches!(err, SanitizerError::InvalidOption { ref step, .. } if step == "split-name-list"));
    }

    #[test]
    fn test_step_key_is_not_passed_as_option() {
        fn create_checked(
            config: &StepConfig,
            _: &Configuration,
        ) -> Result<Box<dyn SanitizerStep>, SanitizerError> {
            if config.contains(STEP_KEY) || !config.contains("mode") {
                return Err(SanitizerError::invalid_option(config.step(), "unexpected options"));
            }
            split_name_list::create(&StepConfig::new(config.step(), Default::default()), &Configuration::new())
        }

        let mut registry = StepRegistry::new();
        registry.register("checked", create_checked);

        let rules = vec![entry("step: checked\nmode: strict")];
        let compiled = compile_rules(Some(rules.as_slice()), &Configuration::new(), &registry).unwrap();
        assert_eq!(compiled.len(), 1);
    }
}
