//! Subscription tier to capability resolution.
//!
//! The [`AccessResolver`] holds a table of tier labels and the access tags
//! each one grants. Unknown tiers are an error; callers that must not fail
//! use [`AccessResolver::resolve_or_restrict`], which falls back to the most
//! restrictive tier and logs a data-integrity warning.

pub mod capability;

pub use capability::CapabilitySet;

use std::collections::BTreeMap;

use crate::catalog::builtin::{NUTRITION, TRAINING};
use crate::error::{OnboardError, Result};

/// Tier label that grants no gated steps.
pub const BASIC: &str = "basic";

/// Built-in paid tier.
pub const PREMIUM: &str = "premium";

/// Built-in one-off purchase tier.
pub const LIFETIME: &str = "lifetime";

/// Maps subscription tiers to capability sets.
#[derive(Debug, Clone)]
pub struct AccessResolver {
    tiers: BTreeMap<String, CapabilitySet>,
    fallback_tier: String,
}

impl AccessResolver {
    /// Create a resolver from a tier table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if `fallback_tier` is not in the table.
    pub fn new(tiers: BTreeMap<String, CapabilitySet>, fallback_tier: &str) -> Result<Self> {
        let tiers: BTreeMap<String, CapabilitySet> = tiers
            .into_iter()
            .map(|(label, caps)| (normalize(&label), caps))
            .collect();
        let fallback_tier = normalize(fallback_tier);

        if !tiers.contains_key(&fallback_tier) {
            return Err(OnboardError::ConfigValidationError {
                message: format!(
                    "Fallback tier '{}' is not defined in the tier table",
                    fallback_tier
                ),
            });
        }

        Ok(Self {
            tiers,
            fallback_tier,
        })
    }

    /// The built-in tier table: basic, premium, lifetime.
    pub fn builtin() -> Self {
        let paid: CapabilitySet = [TRAINING, NUTRITION].into_iter().collect();
        let mut tiers = BTreeMap::new();
        tiers.insert(BASIC.to_string(), CapabilitySet::empty());
        tiers.insert(PREMIUM.to_string(), paid.clone());
        tiers.insert(LIFETIME.to_string(), paid);

        Self {
            tiers,
            fallback_tier: BASIC.to_string(),
        }
    }

    /// Resolve a tier label to its capability set.
    ///
    /// Labels are compared after trimming and lower-casing.
    pub fn resolve(&self, tier: &str) -> Result<CapabilitySet> {
        self.tiers
            .get(&normalize(tier))
            .cloned()
            .ok_or_else(|| OnboardError::UnknownTier {
                tier: tier.to_string(),
            })
    }

    /// Resolve a tier, treating unknown labels as the most restrictive tier.
    pub fn resolve_or_restrict(&self, tier: &str) -> CapabilitySet {
        match self.resolve(tier) {
            Ok(caps) => caps,
            Err(e) => {
                tracing::warn!(
                    tier = %tier,
                    fallback = %self.fallback_tier,
                    "data integrity: {}; applying most restrictive tier",
                    e
                );
                self.fallback_capabilities()
            }
        }
    }

    /// Capabilities of the fail-safe tier.
    pub fn fallback_capabilities(&self) -> CapabilitySet {
        self.tiers
            .get(&self.fallback_tier)
            .cloned()
            .unwrap_or_default()
    }

    /// Label of the fail-safe tier.
    pub fn fallback_tier(&self) -> &str {
        &self.fallback_tier
    }

    /// Whether the label is a known tier.
    pub fn is_known(&self, tier: &str) -> bool {
        self.tiers.contains_key(&normalize(tier))
    }

    /// All tiers and their capabilities, sorted by label.
    pub fn tiers(&self) -> impl Iterator<Item = (&str, &CapabilitySet)> {
        self.tiers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for AccessResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_grants_nothing() {
        let resolver = AccessResolver::builtin();
        assert!(resolver.resolve("basic").unwrap().is_empty());
    }

    #[test]
    fn premium_and_lifetime_grant_training_and_nutrition() {
        let resolver = AccessResolver::builtin();
        for tier in ["premium", "lifetime"] {
            let caps = resolver.resolve(tier).unwrap();
            assert!(caps.grants("training"));
            assert!(caps.grants("nutrition"));
        }
    }

    #[test]
    fn labels_are_normalized() {
        let resolver = AccessResolver::builtin();
        assert!(resolver.resolve("  Premium ").unwrap().grants("training"));
        assert!(resolver.is_known("LIFETIME"));
    }

    #[test]
    fn unknown_tier_is_an_error() {
        let resolver = AccessResolver::builtin();
        let err = resolver.resolve("platinum").unwrap_err();
        assert!(matches!(err, OnboardError::UnknownTier { ref tier } if tier == "platinum"));
    }

    #[test]
    fn unknown_tier_falls_back_to_most_restrictive() {
        let resolver = AccessResolver::builtin();
        let caps = resolver.resolve_or_restrict("platinum");
        assert_eq!(caps, resolver.resolve("basic").unwrap());
    }

    #[test]
    fn custom_table_requires_fallback_entry() {
        let mut tiers = BTreeMap::new();
        tiers.insert("pro".to_string(), CapabilitySet::empty());
        let err = AccessResolver::new(tiers, "free").unwrap_err();
        assert!(err.to_string().contains("free"));
    }

    #[test]
    fn custom_table_with_custom_fallback() {
        let mut tiers = BTreeMap::new();
        tiers.insert("Free".to_string(), CapabilitySet::empty());
        tiers.insert("pro".to_string(), ["training"].into_iter().collect());
        let resolver = AccessResolver::new(tiers, "free").unwrap();

        assert_eq!(resolver.fallback_tier(), "free");
        assert!(resolver.resolve("free").unwrap().is_empty());
        assert!(resolver.resolve_or_restrict("premium").is_empty());
    }

    #[test]
    fn tiers_sorted_by_label() {
        let resolver = AccessResolver::builtin();
        let labels: Vec<&str> = resolver.tiers().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["basic", "lifetime", "premium"]);
    }
}
