// place-sanitizer/src/lib.rs
//! # Place Sanitizer
//!
//! `place-sanitizer` normalizes the raw name and address tags of a place into
//! a structured list of name tokens before they are handed to a tokenizer.
//! The normalization is a configurable pipeline of sanitizer steps, each of
//! which transforms the `(names, address)` pair produced by the previous one.
//!
//! ## Modules
//!
//! * `place_name`: Defines `PlaceName`, the token carried through the pipeline.
//! * `place`: Defines `PlaceInfo`, the raw record a sanitizer consumes.
//! * `config`: Rule entries, step options and the shared `Configuration`.
//! * `step`: Defines the `SanitizerStep` trait every executable step implements.
//! * `registry`: Maps step identifiers to the factories that build them.
//! * `compiler`: Resolves rule entries into executable steps.
//! * `sanitizer`: Defines `PlaceSanitizer`, which runs the compiled steps.
//! * `sanitizers`: The built-in step catalogue (`split-name-list`).
//! * `errors`: Configuration errors raised while a sanitizer is built.
//!
//! ## Usage Example
//!
//! ```rust
//! use place_sanitizer::{Configuration, PlaceInfo, PlaceSanitizer, TokenizerRules};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Read the `sanitizers:` section of a tokenizer configuration.
//!     let rules = TokenizerRules::from_yaml_str("sanitizers:\n  - step: split-name-list\n")?;
//!
//!     // 2. Compile it once.
//!     let sanitizer = PlaceSanitizer::new(rules.sanitizers(), &Configuration::new())?;
//!
//!     // 3. Process places.
//!     let place = PlaceInfo::new()
//!         .with_name("name:de:de", "1;2;3")
//!         .with_address("street", "Bald");
//!     let (names, address) = sanitizer.process(&place)?;
//!
//!     assert_eq!(names.len(), 3);
//!     assert!(names.iter().all(|n| n.kind == "name" && n.suffix == "de:de"));
//!     assert_eq!(address.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Building a sanitizer fails with a [`SanitizerError`] when a rule has no
//! `step`, names an unknown step, or carries options the step rejects.
//! Processing a place never fails on its own; errors raised by a step are
//! passed through as `anyhow::Error`.
//!
//! ---
//! License: GPL-3.0-or-later

pub mod compiler;
pub mod config;
pub mod errors;
pub mod place;
pub mod place_name;
pub mod registry;
pub mod sanitizer;
pub mod sanitizers;
pub mod step;

/// Re-exports the configuration types for building a sanitizer.
pub use config::{Configuration, RuleEntry, StepConfig, TokenizerRules, STEP_KEY};

/// Re-exports the error type raised while compiling rules.
pub use errors::SanitizerError;

/// Re-exports the input record and the token type.
pub use place::PlaceInfo;
pub use place_name::PlaceName;

/// Re-exports the step contract and the registration surface.
pub use registry::{default_registry, StepFactory, StepRegistry};
pub use step::{NameLists, SanitizerStep};

pub use compiler::{compile_rules, CompiledStep};
pub use sanitizer::PlaceSanitizer;
