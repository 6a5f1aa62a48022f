//! Onboarding progress controller.
//!
//! - [`transitions`] - pure state machine over a progress record
//! - [`view`] - the [`OnboardingView`] handed to callers, and its [`OnboardingSnapshot`]
//! - [`service`] - [`OnboardingService`], the facade with injected stores
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
//! let view = service.complete_milestone("alice", "welcome_shown").unwrap();
//! assert_eq!(view.current_step, CurrentStep::Step(1));
//! ```

pub mod service;
pub mod transitions;
pub mod view;

pub use service::{OnboardingService, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_BACKOFF};
pub use transitions::{current_step, mark_milestone, refresh_completed, reset_all, CurrentStep};
pub use view::{OnboardingSnapshot, OnboardingView};
