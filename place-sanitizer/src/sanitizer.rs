//! sanitizer.rs - Runs the compiled sanitizer steps over a place.
//!
//! A [`PlaceSanitizer`] is built once from the `sanitizers:` rule list and
//! then reused for every place. Processing decomposes the raw name and
//! address tags into [`PlaceName`] tokens and threads both lists through the
//! steps in their configured order.

use anyhow::Result;
use log::trace;
use std::fmt;

use crate::compiler::{compile_rules, CompiledStep};
use crate::config::{Configuration, RuleEntry};
use crate::errors::SanitizerError;
use crate::place::PlaceInfo;
use crate::place_name::PlaceName;
use crate::registry::{default_registry, StepRegistry};
use crate::step::NameLists;

/// An immutable, compiled sanitization pipeline.
pub struct PlaceSanitizer {
    steps: Vec<CompiledStep>,
}

impl PlaceSanitizer {
    /// Builds a sanitizer from the built-in steps.
    ///
    /// `config` is only handed on to the step factories.
    pub fn new(rules: Option<&[RuleEntry]>, config: &Configuration) -> Result<Self, SanitizerError> {
        Self::with_registry(rules, config, default_registry())
    }

    /// Builds a sanitizer that resolves steps through `registry`.
    pub fn with_registry(
        rules: Option<&[RuleEntry]>,
        config: &Configuration,
        registry: &StepRegistry,
    ) -> Result<Self, SanitizerError> {
        let steps = compile_rules(rules, config, registry)?;
        Ok(Self { steps })
    }

    /// Returns the sanitized `(names, address)` lists of `place`.
    ///
    /// Errors raised by a step are returned as they are.
    pub fn process(&self, place: &PlaceInfo) -> Result<NameLists> {
        let mut names: Vec<PlaceName> = place.name_tokens();
        let mut address: Vec<PlaceName> = place.address_tokens();

        for compiled in &self.steps {
            trace!(
                "Applying '{}' to {} names and {} address parts.",
                compiled.name,
                names.len(),
                address.len()
            );
            (names, address) = compiled.step.apply(names, address)?;
        }

        Ok((names, address))
    }

    /// Number of compiled steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Identifiers of the compiled steps, in execution order.
    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.name.as_str())
    }
}

impl fmt::Debug for PlaceSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceSanitizer")
            .field("steps", &self.step_names().collect::<Vec<_>>())
            .finish()
    }
}
