//! Tests for the public library surface.

use onboard::catalog::StepCatalog;
use onboard::config::{load_merged_config, validate, OnboardConfig};
use onboard::controller::{CurrentStep, OnboardingService};
use onboard::progress::FileProgressStore;
use onboard::subscription::StaticTierLookup;
use onboard::OnboardError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_type_is_exported() {
    let err = OnboardError::UnknownFlag { flag: "x".into() };
    assert!(err.to_string().contains('x'));
}

#[test]
fn default_config_uses_builtin_catalog() {
    let config = OnboardConfig::default();
    validate(&config).unwrap();
    assert_eq!(config.catalog().unwrap(), StepCatalog::builtin());
}

#[test]
fn file_store_service_survives_restart() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("progress");

    {
        let service =
            OnboardingService::new(StaticTierLookup::new("lifetime"), FileProgressStore::new(&dir));
        service.complete_milestone("carol", "welcome_shown").unwrap();
        service.complete_milestone("carol", "goal_set").unwrap();
    }

    let service =
        OnboardingService::new(StaticTierLookup::new("lifetime"), FileProgressStore::new(&dir));
    let view = service.get_onboarding_view("carol").unwrap();
    assert_eq!(view.current_step, CurrentStep::Step(2));
    assert_eq!(view.step_position, Some(3));
}

#[test]
fn service_from_config_uses_configured_tiers() {
    let temp = TempDir::new().unwrap();
    let onboard_dir = temp.path().join(".onboard");
    fs::create_dir_all(&onboard_dir).unwrap();
    fs::write(
        onboard_dir.join("config.yml"),
        "tiers:\n  basic: []\n  trial: [training]\n",
    )
    .unwrap();
    let config = load_merged_config(temp.path()).unwrap();

    let service = OnboardingService::from_config(
        StaticTierLookup::new("trial"),
        FileProgressStore::new(temp.path().join("progress")),
        &config,
    )
    .unwrap();

    let view = service.get_onboarding_view("dave").unwrap();
    assert_eq!(view.effective_step_count, 5);
}
