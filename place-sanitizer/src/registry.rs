//! registry.rs - Maps step identifiers to the factories that build them.
//!
//! The built-in catalogue is registered once per process into a shared,
//! read-only registry. Callers that bring their own steps build a registry
//! of their own, usually starting from [`StepRegistry::builtin`].

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

use crate::config::{Configuration, StepConfig};
use crate::errors::SanitizerError;
use crate::sanitizers;
use crate::step::SanitizerStep;

/// Builds an executable step from its options and the shared configuration.
///
/// Factories reject malformed options with [`SanitizerError::InvalidOption`].
pub type StepFactory =
    fn(&StepConfig, &Configuration) -> Result<Box<dyn SanitizerStep>, SanitizerError>;

/// Lookup table from step identifier to factory.
#[derive(Clone, Default)]
pub struct StepRegistry {
    factories: HashMap<String, StepFactory>,
}

lazy_static! {
    /// Registry holding the built-in steps, shared by all sanitizers that
    /// don't bring their own.
    static ref BUILTIN_REGISTRY: StepRegistry = StepRegistry::builtin();
}

/// Returns the process-wide registry of built-in steps.
pub fn default_registry() -> &'static StepRegistry {
    &BUILTIN_REGISTRY
}

impl StepRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all built-in steps.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        sanitizers::register_builtin(&mut registry);
        registry
    }

    /// Registers a factory under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, factory: StepFactory) -> &mut Self {
        let name = name.into();
        if self.factories.insert(name.clone(), factory).is_some() {
            log::debug!("Replacing sanitizer step factory '{}'.", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<StepFactory> {
        self.factories.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Identifiers of all registered steps, sorted.
    pub fn step_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepRegistry")
            .field("steps", &self.step_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place_name::PlaceName;
    use crate::sanitizers::split_name_list;
    use crate::step::NameLists;

    fn create_noop(
        _: &StepConfig,
        _: &Configuration,
    ) -> Result<Box<dyn SanitizerStep>, SanitizerError> {
        Ok(Box::new(
            |names: Vec<PlaceName>, address: Vec<PlaceName>| -> anyhow::Result<NameLists> {
                Ok((names, address))
            },
        ))
    }

    #[test]
    fn test_builtin_registry_has_split_name_list() {
        let registry = default_registry();
        assert!(registry.contains(split_name_list::STEP_NAME));
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn test_register_custom_step() {
        let mut registry = StepRegistry::builtin();
        registry.register("noop", create_noop);

        assert_eq!(registry.step_names(), vec!["noop", "split-name-list"]);
        assert!(!default_registry().contains("noop"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = StepRegistry::new();
        assert!(registry.step_names().is_empty());
        assert_eq!(format!("{:?}", registry), "StepRegistry { steps: [] }");
    }
}
