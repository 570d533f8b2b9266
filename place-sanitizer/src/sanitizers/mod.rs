//! Built-in sanitizer steps.
//!
//! Each step lives in its own file and exposes a `STEP_NAME` and a `create`
//! factory. To add a step, create a new file, declare it here with
//! `pub mod <step>;` and register it in [`register_builtin`].

use crate::registry::StepRegistry;

pub mod split_name_list;

/// Registers every built-in step with `registry`.
pub fn register_builtin(registry: &mut StepRegistry) {
    registry.register(split_name_list::STEP_NAME, split_name_list::create);
}
