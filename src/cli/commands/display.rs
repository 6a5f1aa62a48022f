//! Shared display helpers for onboarding views.
//!
//! Used by `view`, `complete` and `reset` so a user's progress renders the
//! same way after every command.

use serde::Serialize;

use crate::catalog::StepDefinition;
use crate::controller::{CurrentStep, OnboardingSnapshot};
use crate::error::{OnboardError, Result};
use crate::progress::ProgressState;
use crate::ui::{StepMark, UserInterface};

/// Mark for a step given the user's progress and current step.
pub fn step_mark(step: &StepDefinition, current: CurrentStep, progress: &ProgressState) -> StepMark {
    if current.step_id() == Some(step.id) {
        StepMark::Current
    } else if progress.is_set(&step.milestone) {
        StepMark::Done
    } else {
        StepMark::Pending
    }
}

/// Render a user's onboarding snapshot.
///
/// The step list and the position line come from the same snapshot, so
/// they always agree.
pub fn show_view(ui: &mut dyn UserInterface, user: &str, snapshot: &OnboardingSnapshot) {
    let view = &snapshot.view;
    ui.show_header(&format!("Onboarding · {} ({})", user, view.tier));

    for (index, step) in snapshot.effective.iter().enumerate() {
        ui.show_step(
            index + 1,
            &step.label,
            step_mark(step, view.current_step, &snapshot.progress),
        );
    }

    match (&view.step_label, view.step_position) {
        (Some(label), Some(position)) => ui.message(&format!(
            "Step {} of {}: {}",
            position, view.effective_step_count, label
        )),
        _ => ui.success("Onboarding complete"),
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(ui: &mut dyn UserInterface, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| OnboardError::Other(anyhow::anyhow!("Failed to serialize output: {}", e)))?;
    ui.emit(&json);
    Ok(())
}
