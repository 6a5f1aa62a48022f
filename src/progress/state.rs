//! Per-user onboarding progress record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{StepCatalog, StepDefinition};

/// Persisted onboarding progress for one user.
///
/// Flags are keyed by milestone name. Flags that no catalog step refers to
/// are kept as-is so records survive catalog changes in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Schema version for migration.
    #[serde(default = "current_version")]
    pub version: u32,

    /// Store revision; 0 means never persisted.
    #[serde(default)]
    pub revision: u64,

    /// Milestone completion flags.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,

    /// Whether every effective step is done.
    #[serde(default)]
    pub completed: bool,

    /// Last successful write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When `completed` last became true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

fn current_version() -> u32 {
    ProgressState::CURRENT_VERSION
}

impl ProgressState {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Zero state: every catalog flag false, not completed.
    pub fn new(catalog: &StepCatalog) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            revision: 0,
            flags: catalog
                .milestones()
                .map(|name| (name.to_string(), false))
                .collect(),
            completed: false,
            updated_at: None,
            completed_at: None,
        }
    }

    /// Whether a flag is set. Missing flags read as false.
    pub fn is_set(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    /// Set a flag to true.
    pub fn set(&mut self, flag: &str) {
        self.flags.insert(flag.to_string(), true);
    }

    /// Whether every step in the list has its milestone set.
    pub fn all_done(&self, steps: &[StepDefinition]) -> bool {
        steps.iter().all(|step| self.is_set(&step.milestone))
    }

    /// Flags with no step in the catalog.
    pub fn unknown_flags<'a>(&'a self, catalog: &'a StepCatalog) -> impl Iterator<Item = &'a str> {
        self.flags
            .keys()
            .map(String::as_str)
            .filter(move |name| !catalog.has_milestone(name))
    }

    /// Number of flags currently set.
    pub fn done_count(&self) -> usize {
        self.flags.values().filter(|done| **done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_all_catalog_flags_false() {
        let catalog = StepCatalog::builtin();
        let state = ProgressState::new(&catalog);

        assert_eq!(state.version, ProgressState::CURRENT_VERSION);
        assert_eq!(state.revision, 0);
        assert_eq!(state.flags.len(), catalog.len());
        assert!(state.flags.values().all(|v| !v));
        assert!(!state.completed);
    }

    #[test]
    fn missing_flag_reads_false() {
        let state = ProgressState::new(&StepCatalog::builtin());
        assert!(!state.is_set("not_a_flag"));
    }

    #[test]
    fn all_done_over_subset() {
        let catalog = StepCatalog::builtin();
        let mut state = ProgressState::new(&catalog);
        state.set("welcome_shown");
        state.set("goal_set");

        assert!(state.all_done(&catalog.steps()[..2]));
        assert!(!state.all_done(catalog.steps()));
        assert!(state.all_done(&[]));
        assert_eq!(state.done_count(), 2);
    }

    #[test]
    fn unknown_flags_are_listed() {
        let catalog = StepCatalog::builtin();
        let mut state = ProgressState::new(&catalog);
        state.flags.insert("legacy_tour_seen".to_string(), true);

        let unknown: Vec<&str> = state.unknown_flags(&catalog).collect();
        assert_eq!(unknown, vec!["legacy_tour_seen"]);
    }

    #[test]
    fn deserializes_partial_record() {
        let yaml = "flags:\n  welcome_shown: true\n";
        let state: ProgressState = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(state.version, ProgressState::CURRENT_VERSION);
        assert_eq!(state.revision, 0);
        assert!(state.is_set("welcome_shown"));
        assert!(!state.completed);
    }
}
