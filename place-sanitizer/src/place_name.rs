//! place_name.rs - The name token carried through the sanitization pipeline.
//!
//! A `PlaceName` holds one name or address candidate: the value itself, the
//! kind of tag it came from (`name`, `street`, ...), an optional suffix
//! (usually a language or script qualifier such as `de` or `de:de`) and a bag
//! of free-form attributes that steps use to annotate the name for later stages.
//!
//! Tokens are treated as values. Steps derive new tokens through `Clone` plus
//! the consuming `with_*` overrides; the attribute bag is owned by each token,
//! so annotating a derived token never shows up on the token it came from.

use std::collections::HashMap;
use std::fmt;

/// A single name or address candidate with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceName {
    /// The name or address value.
    pub name: String,
    /// Category of the value, taken from the leading part of the tag key.
    pub kind: String,
    /// Qualifier taken from the rest of the tag key. Empty if there was none.
    pub suffix: String,
    attributes: HashMap<String, String>,
}

impl PlaceName {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            suffix: suffix.into(),
            attributes: HashMap::new(),
        }
    }

    /// Builds a token from a raw tag of the form `kind` or `kind:suffix`.
    ///
    /// Only the first colon separates kind and suffix; the suffix may contain
    /// further colons. Surrounding whitespace is removed from all parts.
    pub fn from_tag(key: &str, value: &str) -> Self {
        let (kind, suffix) = match key.split_once(':') {
            Some((kind, suffix)) => (kind.trim(), suffix.trim()),
            None => (key.trim(), ""),
        };
        Self::new(value.trim(), kind, suffix)
    }

    /// Replaces the name of a cloned token.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Merges the given attributes over the existing ones.
    ///
    /// Keys that are not mentioned keep their value, new keys are added and
    /// existing keys are overwritten.
    #[must_use]
    pub fn with_attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes
            .extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets an attribute on this token, overwriting any previous value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Iterates over all attributes in no particular order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlaceName(name='{}',kind='{}',suffix='{}')",
            self.name, self.kind, self.suffix
        )
    }
}
