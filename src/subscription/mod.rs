//! User/subscription lookup.
//!
//! The onboarding core only needs one fact about a user: the label of their
//! subscription tier. [`TierLookup`] is the seam to whatever owns user
//! records; the adapters here cover tests, the CLI, and fixed-tier use.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{OnboardError, Result};

/// Read-only access to a user's subscription tier.
pub trait TierLookup {
    /// The user's tier label.
    ///
    /// # Errors
    ///
    /// `UserNotFound` if the user has no record.
    fn tier_of(&self, user_id: &str) -> Result<String>;
}

impl<L: TierLookup + ?Sized> TierLookup for Box<L> {
    fn tier_of(&self, user_id: &str) -> Result<String> {
        (**self).tier_of(user_id)
    }
}

/// Every user has the same tier.
#[derive(Debug, Clone)]
pub struct StaticTierLookup {
    tier: String,
}

impl StaticTierLookup {
    /// Create a lookup that always answers `tier`.
    pub fn new(tier: impl Into<String>) -> Self {
        Self { tier: tier.into() }
    }
}

impl TierLookup for StaticTierLookup {
    fn tier_of(&self, _user_id: &str) -> Result<String> {
        Ok(self.tier.clone())
    }
}

/// In-memory user → tier table.
#[derive(Debug, Clone, Default)]
pub struct MemoryTierLookup {
    users: HashMap<String, String>,
}

impl MemoryTierLookup {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user's tier.
    pub fn with_user(mut self, user_id: impl Into<String>, tier: impl Into<String>) -> Self {
        self.set_tier(user_id, tier);
        self
    }

    /// Change a user's tier.
    pub fn set_tier(&mut self, user_id: impl Into<String>, tier: impl Into<String>) {
        self.users.insert(user_id.into(), tier.into());
    }
}

impl TierLookup for MemoryTierLookup {
    fn tier_of(&self, user_id: &str) -> Result<String> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| OnboardError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }
}

/// User → tier table read from a YAML map on every lookup.
///
/// ```yaml
/// alice: premium
/// bob: basic
/// ```
#[derive(Debug, Clone)]
pub struct FileTierLookup {
    path: PathBuf,
}

impl FileTierLookup {
    /// Create a lookup backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the user table.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(OnboardError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_yaml::from_str(&content).map_err(|e| OnboardError::ConfigParseError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl TierLookup for FileTierLookup {
    fn tier_of(&self, user_id: &str) -> Result<String> {
        self.load()?
            .remove(user_id)
            .ok_or_else(|| OnboardError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }
}
