//! Effective step list computation.
//!
//! The sequencer filters the catalog down to the steps a user's
//! capabilities unlock, and numbers them contiguously for display.

use crate::access::CapabilitySet;
use crate::catalog::StepDefinition;

/// Steps visible for the given capabilities, in catalog order.
///
/// A step is dropped when it carries an access tag the capability set does
/// not grant. Ungated steps are always kept.
pub fn effective_steps(
    catalog: &[StepDefinition],
    capabilities: &CapabilitySet,
) -> Vec<StepDefinition> {
    catalog
        .iter()
        .filter(|step| match &step.access_tag {
            Some(tag) => capabilities.grants(tag),
            None => true,
        })
        .cloned()
        .collect()
}

/// 1-based display position of a step within the effective list.
///
/// Returns `None` when the step was filtered out or does not exist.
pub fn position_of(step_id: u32, effective: &[StepDefinition]) -> Option<usize> {
    effective
        .iter()
        .position(|step| step.id == step_id)
        .map(|index| index + 1)
}
