//! The ordered catalog of onboarding steps.
//!
//! A [`StepCatalog`] is the full, tier-independent list of steps. Catalog
//! order is significance order: the sequencer filters it but never
//! reorders it.

pub mod builtin;
pub mod step;

pub use builtin::builtin_steps;
pub use step::StepDefinition;

use std::collections::HashSet;

use crate::error::{OnboardError, Result};

/// Ordered, validated list of step definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<StepDefinition>,
}

impl StepCatalog {
    /// Build a catalog, rejecting duplicate ids or milestone flags.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut milestones = HashSet::new();

        for step in &steps {
            if !ids.insert(step.id) {
                return Err(OnboardError::ConfigValidationError {
                    message: format!("Duplicate step id {}", step.id),
                });
            }
            if !milestones.insert(step.milestone.as_str()) {
                return Err(OnboardError::ConfigValidationError {
                    message: format!("Duplicate milestone '{}'", step.milestone),
                });
            }
        }

        Ok(Self { steps })
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            steps: builtin_steps(),
        }
    }

    /// Steps in catalog order.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the catalog has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Look up a step by id.
    pub fn get(&self, id: u32) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Look up the step completed by a milestone flag.
    pub fn by_milestone(&self, flag: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.milestone == flag)
    }

    /// Whether the flag belongs to some step in the catalog.
    pub fn has_milestone(&self, flag: &str) -> bool {
        self.by_milestone(flag).is_some()
    }

    /// Milestone flag names in catalog order.
    pub fn milestones(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.milestone.as_str())
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
