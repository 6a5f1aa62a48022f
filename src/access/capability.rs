//! Capability sets.
//!
//! A capability set is the set of access tags a subscription tier grants.
//! It is derived on every evaluation and never persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Access tags granted by a tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<String>);

impl CapabilitySet {
    /// An empty set (the most restrictive).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the tag is granted.
    pub fn grants(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Add a tag.
    pub fn insert(&mut self, tag: impl Into<String>) {
        self.0.insert(tag.into());
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tags are granted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
