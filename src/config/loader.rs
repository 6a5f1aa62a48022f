//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. User global config (`~/.onboard/config.yml`)
//! 2. Project config (`.onboard/config.yml` under the working directory)
//!
//! An explicit `--config` path is loaded on its own, without merging.

use crate::config::merger::merge_configs;
use crate::config::schema::OnboardConfig;
use crate::error::{OnboardError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.onboard/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .onboard/config.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given root directory.
    pub fn discover(root: &Path) -> Self {
        Self {
            user_global: existing(dirs::home_dir().map(|h| h.join(".onboard").join("config.yml"))),
            project: existing(Some(root.join(".onboard").join("config.yml"))),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

fn existing(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| p.exists())
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OnboardError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OnboardError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| OnboardError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<OnboardConfig> {
    let value = load_config_value(path)?;
    parse_value(value, path)
}

/// Load and merge every discovered config file.
///
/// Missing files are not an error: with none present the built-in
/// defaults apply.
pub fn load_merged_config(root: &Path) -> Result<OnboardConfig> {
    let paths = ConfigPaths::discover(root);

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    parse_value(
        merge_configs(&layers),
        &root.join(".onboard").join("config.yml"),
    )
}

/// Load config with optional path override.
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<OnboardConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(root),
    }
}

fn parse_value(value: serde_yaml::Value, source: &Path) -> Result<OnboardConfig> {
    serde_yaml::from_value(value).map_err(|e| OnboardError::ConfigParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}
