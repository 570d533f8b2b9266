//! `split-name-list`: splits name values that hold several names.
//!
//! A value like `Foo;Bar` is replaced by one token per non-empty part. The
//! parts keep the kind, suffix and attributes of the original token. Tokens
//! without a delimiter are kept as they are.
//!
//! Options:
//!
//! * `delimiters`: the characters that separate names. Defaults to `;`.

use anyhow::Result;
use log::trace;
use regex::Regex;

use crate::config::{Configuration, StepConfig};
use crate::errors::SanitizerError;
use crate::place_name::PlaceName;
use crate::step::{NameLists, SanitizerStep};

pub const STEP_NAME: &str = "split-name-list";

/// Delimiters used when the rule doesn't set `delimiters`.
pub const DEFAULT_DELIMITERS: &str = ";";

/// Factory registered under [`STEP_NAME`].
pub fn create(
    config: &StepConfig,
    _: &Configuration,
) -> Result<Box<dyn SanitizerStep>, SanitizerError> {
    let delimiter = config.get_delimiter("delimiters", DEFAULT_DELIMITERS)?;
    Ok(Box::new(SplitNameList::new(delimiter)))
}

#[derive(Debug, Clone)]
pub struct SplitNameList {
    delimiter: Regex,
}

impl SplitNameList {
    pub fn new(delimiter: Regex) -> Self {
        Self { delimiter }
    }

    fn split(&self, names: Vec<PlaceName>) -> Vec<PlaceName> {
        let mut out = Vec::with_capacity(names.len());

        for name in names {
            if !self.delimiter.is_match(&name.name) {
                out.push(name);
                continue;
            }

            let parts: Vec<String> = self
                .delimiter
                .split(&name.name)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect();
            trace!("Splitting {} into {} names.", name, parts.len());
            out.extend(parts.into_iter().map(|part| name.clone().with_name(part)));
        }

        out
    }
}

impl SanitizerStep for SplitNameList {
    fn apply(&self, names: Vec<PlaceName>, address: Vec<PlaceName>) -> Result<NameLists> {
        Ok((self.split(names), self.split(address)))
    }
}
