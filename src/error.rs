//! Error types for onboarding operations.
//!
//! This module defines [`OnboardError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `UnknownTier` is recovered by the access resolver's fail-safe and logged
//! - `ProgressNotFound` is recovered by synthesizing a zero state
//! - `ConcurrentUpdate` is retried by the service with a fresh read
//! - `UnknownFlag` and `UserNotFound` are surfaced to the caller
//! - Use `anyhow::Error` (via `OnboardError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for onboarding operations.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Subscription tier label is not in the tier table.
    #[error("Unknown subscription tier: {tier}")]
    UnknownTier { tier: String },

    /// No progress record exists for the user.
    #[error("No onboarding progress for user '{user_id}'")]
    ProgressNotFound { user_id: String },

    /// The stored record changed between read and write.
    #[error("Onboarding progress for user '{user_id}' was modified concurrently")]
    ConcurrentUpdate { user_id: String },

    /// Milestone flag is not part of the step catalog.
    #[error("Unknown milestone flag: {flag}")]
    UnknownFlag { flag: String },

    /// The user/subscription collaborator has no record for this user.
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    /// Backing store could not be reached or written.
    #[error("Progress store unavailable, try again: {message}")]
    StoreUnavailable { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or data file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OnboardError {
    /// Whether retrying the operation later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            OnboardError::ConcurrentUpdate { .. } | OnboardError::StoreUnavailable { .. }
        )
    }
}

/// Result type alias for onboarding operations.
pub type Result<T> = std::result::Result<T, OnboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tier_displays_tier() {
        let err = OnboardError::UnknownTier {
            tier: "gold".into(),
        };
        assert!(err.to_string().contains("gold"));
    }

    #[test]
    fn unknown_flag_displays_flag() {
        let err = OnboardError::UnknownFlag {
            flag: "did_a_thing".into(),
        };
        assert!(err.to_string().contains("did_a_thing"));
    }

    #[test]
    fn concurrent_update_displays_user() {
        let err = OnboardError::ConcurrentUpdate {
            user_id: "u-42".into(),
        };
        assert!(err.to_string().contains("u-42"));
    }

    #[test]
    fn store_unavailable_says_try_again() {
        let err = OnboardError::StoreUnavailable {
            message: "disk full".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("try again"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = OnboardError::ConfigParseError {
            path: PathBuf::from("/onboard.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/onboard.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn transient_errors() {
        assert!(OnboardError::ConcurrentUpdate {
            user_id: "u".into()
        }
        .is_transient());
        assert!(OnboardError::StoreUnavailable {
            message: "down".into()
        }
        .is_transient());
        assert!(!OnboardError::UnknownFlag { flag: "x".into() }.is_transient());
        assert!(!OnboardError::UserNotFound {
            user_id: "u".into()
        }
        .is_transient());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: OnboardError = io_err.into();
        assert!(matches!(err, OnboardError::Io(_)));
    }
}
