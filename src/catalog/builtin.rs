//! Built-in onboarding catalog.
//!
//! Used whenever configuration does not define its own `steps:` list.

use super::StepDefinition;

/// Milestone flag names of the built-in catalog, in catalog order.
pub const WELCOME_SHOWN: &str = "welcome_shown";
pub const GOAL_SET: &str = "goal_set";
pub const MISSIONS_SELECTED: &str = "missions_selected";
pub const SCHEMA_SELECTED: &str = "schema_selected";
pub const NUTRITION_SELECTED: &str = "nutrition_selected";
pub const CHALLENGE_STARTED: &str = "challenge_started";

/// Access tag for training schema steps.
pub const TRAINING: &str = "training";

/// Access tag for nutrition plan steps.
pub const NUTRITION: &str = "nutrition";

/// The built-in step list.
pub fn builtin_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(0, "Welcome", WELCOME_SHOWN),
        StepDefinition::new(1, "Set your goal", GOAL_SET),
        StepDefinition::new(2, "Choose your missions", MISSIONS_SELECTED),
        StepDefinition::new(3, "Pick a training schema", SCHEMA_SELECTED).requires(TRAINING),
        StepDefinition::new(4, "Pick a nutrition plan", NUTRITION_SELECTED).requires(NUTRITION),
        StepDefinition::new(5, "Start the challenge", CHALLENGE_STARTED),
    ]
}
