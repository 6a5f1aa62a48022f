//! Integration tests for the onboard binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from the caller's home, config and data directories.
fn onboard(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("onboard"));
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("ONBOARD_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(temp.path().join("data"));
    cmd
}

fn with_users(users: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("users.yml"), users).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("onboard"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("onboarding"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("onboard"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn view_new_basic_user() -> Result<(), Box<dyn std::error::Error>> {
    let temp = with_users("alice: basic\n");
    onboard(&temp)
        .args(["view", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 4: Welcome"));

    assert!(temp.path().join("data/progress").is_dir());
    Ok(())
}

#[test]
fn view_unknown_user_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = with_users("alice: basic\n");
    onboard(&temp)
        .args(["view", "ghost"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("User not found: ghost"));
    Ok(())
}

#[test]
fn complete_advances_and_persists() -> Result<(), Box<dyn std::error::Error>> {
    let temp = with_users("alice: premium\n");
    onboard(&temp)
        .args(["complete", "alice", "welcome_shown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2 of 6: Set your goal"));

    onboard(&temp)
        .args(["complete", "alice", "goal_set"])
        .assert()
        .success();

    onboard(&temp)
        .args(["view", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3 of 6: Choose your missions"));
    Ok(())
}

#[test]
fn complete_unknown_flag_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    onboard(&temp)
        .args(["complete", "alice", "made_coffee", "--tier", "basic"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("made_coffee"))
        .stdout(predicate::str::contains("welcome_shown"));
    Ok(())
}

#[test]
fn basic_user_completes_without_gated_steps() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    for flag in ["welcome_shown", "goal_set", "missions_selected", "challenge_started"] {
        onboard(&temp)
            .args(["complete", "bob", flag, "--tier", "basic"])
            .assert()
            .success();
    }

    onboard(&temp)
        .args(["view", "bob", "--tier", "basic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding complete"));
    Ok(())
}

#[test]
fn reset_requires_yes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    onboard(&temp)
        .args(["reset", "alice", "--tier", "basic"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
    Ok(())
}

#[test]
fn reset_returns_to_first_step() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    onboard(&temp)
        .args(["complete", "alice", "welcome_shown", "--tier", "basic"])
        .assert()
        .success();

    onboard(&temp)
        .args(["reset", "alice", "--yes", "--tier", "basic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 4: Welcome"));
    Ok(())
}

#[test]
fn view_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let output = onboard(&temp)
        .args(["--json", "view", "alice", "--tier", "premium"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["current_step"]["step"], 0);
    assert_eq!(json["effective_step_count"], 6);
    assert_eq!(json["step_label"], "Welcome");
    assert_eq!(json["completed"], false);
    Ok(())
}

#[test]
fn steps_for_tier() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    onboard(&temp)
        .args(["steps", "--tier", "basic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4. Start the challenge"))
        .stdout(predicate::str::contains("Pick a training schema").not());
    Ok(())
}

#[test]
fn tiers_lists_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    onboard(&temp)
        .arg("tiers")
        .assert()
        .success()
        .stdout(predicate::str::contains("premium: nutrition, training"));
    Ok(())
}

#[test]
fn project_config_changes_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".onboard");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("config.yml"),
        r#"
steps:
  - { id: 0, label: Hello, milestone: hello }
  - { id: 1, label: Coach call, milestone: coach_call, requires: coaching }
tiers:
  basic: []
  coached: [coaching]
"#,
    )?;

    onboard(&temp)
        .args(["view", "alice", "--tier", "coached"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 2: Hello"));
    Ok(())
}

#[test]
fn invalid_config_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("onboard.yml");
    fs::write(&path, "settings:\n  max_attempts: 0\n")?;

    onboard(&temp)
        .arg("--config")
        .arg(&path)
        .arg("tiers")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_attempts"));
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    onboard(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onboard"));
    Ok(())
}

#[test]
fn quiet_json_still_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let output = onboard(&temp)
        .args(["--json", "--quiet", "complete", "alice", "welcome_shown", "--tier", "basic"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["current_step"]["step"], 1);
    assert_eq!(json["step_position"], 2);
    Ok(())
}
