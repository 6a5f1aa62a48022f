//! Step definitions.

use serde::{Deserialize, Serialize};

/// A single onboarding step.
///
/// `id` is a stable identifier; displayed step numbers come from the
/// sequencer's filtered list instead. `milestone` names the progress flag
/// that marks this step done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Stable step identifier.
    pub id: u32,

    /// Human-readable label.
    pub label: String,

    /// Progress flag that completes this step.
    pub milestone: String,

    /// Access tag a tier must grant for this step to be shown.
    #[serde(default, rename = "requires", skip_serializing_if = "Option::is_none")]
    pub access_tag: Option<String>,
}

impl StepDefinition {
    /// Create an ungated step.
    pub fn new(id: u32, label: impl Into<String>, milestone: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            milestone: milestone.into(),
            access_tag: None,
        }
    }

    /// Gate this step behind an access tag.
    pub fn requires(mut self, tag: impl Into<String>) -> Self {
        self.access_tag = Some(tag.into());
        self
    }

    /// Whether the step is visible to every tier.
    pub fn is_ungated(&self) -> bool {
        self.access_tag.is_none()
    }
}
