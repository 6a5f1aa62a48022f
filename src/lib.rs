//! Onboard - tier-aware onboarding progress for a membership platform.
//!
//! A user's current onboarding step is derived from independent completion
//! flags. Some steps are only shown to subscription tiers that unlock them;
//! the rest of the flow renumbers around the missing ones.
//!
//! # Modules
//!
//! - [`access`] - Tier labels to capability sets, with a restrictive fallback
//! - [`catalog`] - Step definitions and the built-in catalog
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`controller`] - Current-step derivation, mutations, and the service facade
//! - [`error`] - Error types and result aliases
//! - [`progress`] - Per-user progress records and stores
//! - [`sequencer`] - Effective step lists per capability set
//! - [`subscription`] - Looking up a user's tier
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use onboard::controller::{CurrentStep, OnboardingService};
//! use onboard::progress::MemoryProgressStore;
//! use onboard::subscription::MemoryTierLookup;
//!
//! let tiers = MemoryTierLookup::new().with_user("alice", "basic");
//! let service = OnboardingService::new(tiers, MemoryProgressStore::new());
//!
//! service.complete_milestone("alice", "welcome_shown").unwrap();
//! let view = service.get_onboarding_view("alice").unwrap();
//! assert_eq!(view.current_step, CurrentStep::Step(1));
//! assert_eq!(view.effective_step_count, 4);
//! ```

pub mod access;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod progress;
pub mod sequencer;
pub mod subscription;
pub mod ui;

pub use error::{OnboardError, Result};
