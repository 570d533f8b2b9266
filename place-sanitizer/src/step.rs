// place-sanitizer/src/step.rs
//! Defines the `SanitizerStep` trait, the contract every executable step obeys.
//!
//! A step receives the current name and address lists, and returns the lists
//! that the next step should see. A step that only works on one list must
//! hand the other one back unchanged. Steps are built once, at sanitizer
//! construction time, and then shared read-only between all processed places.

use anyhow::Result;

use crate::place_name::PlaceName;

/// The `(names, address)` pair threaded through the pipeline.
pub type NameLists = (Vec<PlaceName>, Vec<PlaceName>);

/// A compiled sanitization step.
///
/// Closures with a matching signature implement this trait, so simple
/// steps do not need a dedicated type.
pub trait SanitizerStep: Send + Sync {
    /// Transforms the name and address lists of one place.
    fn apply(&self, names: Vec<PlaceName>, address: Vec<PlaceName>) -> Result<NameLists>;
}

impl<F> SanitizerStep for F
where
    F: Fn(Vec<PlaceName>, Vec<PlaceName>) -> Result<NameLists> + Send + Sync,
{
    fn apply(&self, names: Vec<PlaceName>, address: Vec<PlaceName>) -> Result<NameLists> {
        self(names, address)
    }
}
