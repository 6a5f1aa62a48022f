//! Pure onboarding state transitions.
//!
//! States are the effective steps in order plus a terminal `Completed`. The
//! current state is always the first effective step whose milestone is not
//! set, so marking milestones can only move it forward; only
//! [`reset_all`] moves it back.

use chrono::Utc;
use serde::Serialize;
use std::fmt;

use crate::catalog::{StepCatalog, StepDefinition};
use crate::error::{OnboardError, Result};
use crate::progress::ProgressState;

/// Where a user is in onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentStep {
    /// Waiting on the step with this catalog id.
    Step(u32),
    /// Every effective step is done.
    Completed,
}

impl CurrentStep {
    /// Whether onboarding is finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, CurrentStep::Completed)
    }

    /// Step id, unless completed.
    pub fn step_id(&self) -> Option<u32> {
        match self {
            CurrentStep::Step(id) => Some(*id),
            CurrentStep::Completed => None,
        }
    }
}

impl fmt::Display for CurrentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentStep::Step(id) => write!(f, "step {}", id),
            CurrentStep::Completed => write!(f, "completed"),
        }
    }
}

/// First effective step whose milestone is not set.
///
/// Flags for steps outside `effective` are ignored, and an empty list is
/// vacuously complete.
pub fn current_step(progress: &ProgressState, effective: &[StepDefinition]) -> CurrentStep {
    effective
        .iter()
        .find(|step| !progress.is_set(&step.milestone))
        .map(|step| CurrentStep::Step(step.id))
        .unwrap_or(CurrentStep::Completed)
}

/// Set a milestone flag and recompute `completed` for `effective`.
///
/// Marking an already-set flag changes nothing but still recomputes
/// `completed`, which repairs records whose tier changed since the last
/// write.
///
/// # Errors
///
/// `UnknownFlag` if no catalog step uses `flag`; the input is untouched.
pub fn mark_milestone(
    progress: &ProgressState,
    flag: &str,
    catalog: &StepCatalog,
    effective: &[StepDefinition],
) -> Result<ProgressState> {
    if !catalog.has_milestone(flag) {
        return Err(OnboardError::UnknownFlag {
            flag: flag.to_string(),
        });
    }

    let mut next = progress.clone();
    next.set(flag);
    refresh_completed(&mut next, effective);
    Ok(next)
}

/// Clear every flag and the completed marker.
///
/// Flag keys are kept (including ones the catalog no longer knows), only
/// their values are reset.
pub fn reset_all(progress: &ProgressState) -> ProgressState {
    let mut next = progress.clone();
    for done in next.flags.values_mut() {
        *done = false;
    }
    next.completed = false;
    next.completed_at = None;
    next
}

/// Recompute `completed` (and `completed_at`) against an effective list.
pub fn refresh_completed(progress: &mut ProgressState, effective: &[StepDefinition]) {
    let done = progress.all_done(effective);
    if done && progress.completed_at.is_none() {
        progress.completed_at = Some(Utc::now());
    } else if !done {
        progress.completed_at = None;
    }
    progress.completed = done;
}
