//! place.rs - The raw place record handed to the sanitizer.
//!
//! Only the two tag maps the sanitizer consumes are modelled here. Both are
//! optional, as places without any name or without address tags are common.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::place_name::PlaceName;

/// Raw name and address tags of a single place.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaceInfo {
    /// Name tags, e.g. `name`, `name:de`, `old_name`.
    pub name: Option<BTreeMap<String, String>>,
    /// Address tags, e.g. `street`, `housenumber`, `postcode`.
    pub address: Option<BTreeMap<String, String>>,
}

impl PlaceInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.name
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_address(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.address
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Decomposes the name tags into one token each, in map order.
    pub fn name_tokens(&self) -> Vec<PlaceName> {
        convert_tags(self.name.as_ref())
    }

    /// Decomposes the address tags into one token each, in map order.
    pub fn address_tokens(&self) -> Vec<PlaceName> {
        convert_tags(self.address.as_ref())
    }
}

fn convert_tags(tags: Option<&BTreeMap<String, String>>) -> Vec<PlaceName> {
    tags.map(|tags| {
        tags.iter()
            .map(|(key, value)| PlaceName::from_tag(key, value))
            .collect()
    })
    .unwrap_or_default()
}
