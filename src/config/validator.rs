//! Configuration validation rules.
//!
//! - Step ids and milestone names must be unique
//! - Labels and milestone names must not be blank
//! - The fallback tier must be defined in the tier table
//! - `max_attempts` must be at least one

use std::collections::HashSet;

use crate::config::schema::OnboardConfig;
use crate::error::{OnboardError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Step id if the error is step-specific
    pub step: Option<u32>,
}

impl ValidationError {
    fn new(rule: &str, message: String, step: Option<u32>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            step,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &OnboardConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_steps(config));
    errors.extend(validate_tiers(config));

    if config.settings.max_attempts == 0 {
        errors.push(ValidationError::new(
            "max-attempts",
            "settings.max_attempts must be at least 1".to_string(),
            None,
        ));
    }

    errors
}

fn validate_steps(config: &OnboardConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(steps) = &config.steps else {
        return errors;
    };

    let mut ids = HashSet::new();
    let mut milestones = HashSet::new();

    for step in steps {
        if !ids.insert(step.id) {
            errors.push(ValidationError::new(
                "duplicate-step-id",
                format!("Step id {} is defined more than once", step.id),
                Some(step.id),
            ));
        }

        if step.milestone.trim().is_empty() {
            errors.push(ValidationError::new(
                "blank-milestone",
                format!("Step {} has no milestone flag", step.id),
                Some(step.id),
            ));
        } else if !milestones.insert(step.milestone.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-milestone",
                format!(
                    "Milestone '{}' is used by more than one step",
                    step.milestone
                ),
                Some(step.id),
            ));
        }

        if step.label.trim().is_empty() {
            errors.push(ValidationError::new(
                "blank-label",
                format!("Step {} has no label", step.id),
                Some(step.id),
            ));
        }
    }

    errors
}

fn validate_tiers(config: &OnboardConfig) -> Vec<ValidationError> {
    match config.access_resolver() {
        Ok(_) => Vec::new(),
        Err(e) => vec![ValidationError::new("fallback-tier", e.to_string(), None)],
    }
}

/// Validate a configuration, failing with every problem found.
pub fn validate(config: &OnboardConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(OnboardError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StepDefinition;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&OnboardConfig::default()).is_ok());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let config = OnboardConfig {
            steps: Some(vec![
                StepDefinition::new(1, "A", "a_done"),
                StepDefinition::new(1, "B", "b_done"),
            ]),
            ..Default::default()
        };

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "duplicate-step-id");
        assert_eq!(errors[0].step, Some(1));
    }

    #[test]
    fn duplicate_milestones_are_reported() {
        let config = OnboardConfig {
            steps: Some(vec![
                StepDefinition::new(1, "A", "done"),
                StepDefinition::new(2, "B", "done"),
            ]),
            ..Default::default()
        };

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "duplicate-milestone"));
    }

    #[test]
    fn blank_fields_are_reported() {
        let config = OnboardConfig {
            steps: Some(vec![StepDefinition::new(1, " ", "")]),
            ..Default::default()
        };

        let rules: Vec<String> = validate_config(&config).into_iter().map(|e| e.rule).collect();
        assert!(rules.contains(&"blank-label".to_string()));
        assert!(rules.contains(&"blank-milestone".to_string()));
    }

    #[test]
    fn zero_attempts_is_reported() {
        let mut config = OnboardConfig::default();
        config.settings.max_attempts = 0;

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("max_attempts"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = OnboardConfig {
            steps: Some(vec![
                StepDefinition::new(1, "A", "x"),
                StepDefinition::new(1, "B", "x"),
            ]),
            ..Default::default()
        };
        config.settings.fallback_tier = "nobody".to_string();

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 3);
    }
}
