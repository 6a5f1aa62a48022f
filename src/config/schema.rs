//! Configuration schema definitions.
//!
//! This module contains the structs that map to the YAML configuration
//! file format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::access::{AccessResolver, CapabilitySet, BASIC};
use crate::catalog::{StepCatalog, StepDefinition};
use crate::controller::DEFAULT_MAX_ATTEMPTS;
use crate::error::Result;

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardConfig {
    /// Global settings
    pub settings: Settings,

    /// Tier label → granted access tags. Built-in table when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<BTreeMap<String, Vec<String>>>,

    /// Ordered step catalog. Built-in catalog when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepDefinition>>,
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory for progress records and the user table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Attempts for a write that keeps hitting revision conflicts
    pub max_attempts: u32,

    /// Tier applied when a user's tier label is unknown
    pub fallback_tier: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback_tier: BASIC.to_string(),
        }
    }
}

impl OnboardConfig {
    /// The step catalog this config describes.
    pub fn catalog(&self) -> Result<StepCatalog> {
        match &self.steps {
            Some(steps) => StepCatalog::new(steps.clone()),
            None => Ok(StepCatalog::builtin()),
        }
    }

    /// The tier table this config describes.
    pub fn access_resolver(&self) -> Result<AccessResolver> {
        match &self.tiers {
            Some(tiers) => {
                let table = tiers
                    .iter()
                    .map(|(label, tags)| {
                        (label.clone(), tags.iter().cloned().collect::<CapabilitySet>())
                    })
                    .collect();
                AccessResolver::new(table, &self.settings.fallback_tier)
            }
            None if self.settings.fallback_tier.trim().eq_ignore_ascii_case(BASIC) => {
                Ok(AccessResolver::builtin())
            }
            None => {
                let table = AccessResolver::builtin()
                    .tiers()
                    .map(|(label, caps)| (label.to_string(), caps.clone()))
                    .collect();
                AccessResolver::new(table, &self.settings.fallback_tier)
            }
        }
    }

    /// Data directory, defaulting to `~/.onboard/data`.
    pub fn data_dir(&self) -> PathBuf {
        self.settings.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join(".onboard")
                .join("data")
        })
    }
}
