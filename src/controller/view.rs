//! Caller-facing onboarding view.

use serde::Serialize;

use super::transitions::{current_step, CurrentStep};
use crate::catalog::StepDefinition;
use crate::progress::ProgressState;
use crate::sequencer::position_of;

/// What a login or dashboard screen needs to render onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingView {
    /// Current step id, or completed.
    pub current_step: CurrentStep,

    /// Number of steps this user has to go through.
    pub effective_step_count: usize,

    /// Label of the current step.
    pub step_label: Option<String>,

    /// 1-based display number of the current step.
    pub step_position: Option<usize>,

    /// Whether onboarding is finished.
    pub completed: bool,

    /// Tier label the view was computed for.
    pub tier: String,
}

impl OnboardingView {
    /// Compute the view for a progress record and effective list.
    pub fn build(tier: &str, progress: &ProgressState, effective: &[StepDefinition]) -> Self {
        let current = current_step(progress, effective);
        let step = current
            .step_id()
            .and_then(|id| effective.iter().find(|s| s.id == id));

        Self {
            current_step: current,
            effective_step_count: effective.len(),
            step_label: step.map(|s| s.label.clone()),
            step_position: current.step_id().and_then(|id| position_of(id, effective)),
            completed: current.is_completed(),
            tier: tier.to_string(),
        }
    }
}

/// A view together with the effective list and record it was computed from.
///
/// Renderers use this instead of re-reading the store, so the step list
/// always agrees with the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSnapshot {
    /// The computed view.
    pub view: OnboardingView,

    /// Steps this user goes through, in order.
    pub effective: Vec<StepDefinition>,

    /// Stored progress at the time of evaluation.
    pub progress: ProgressState,
}

impl OnboardingSnapshot {
    /// Compute the view and keep its inputs.
    pub fn build(tier: &str, progress: ProgressState, effective: Vec<StepDefinition>) -> Self {
        Self {
            view: OnboardingView::build(tier, &progress, &effective),
            effective,
            progress,
        }
    }
}
