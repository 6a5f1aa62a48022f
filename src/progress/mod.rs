//! Onboarding progress records and their storage.
//!
//! - [`ProgressState`] - per-user completion flags
//! - [`ProgressStore`] - compare-and-swap storage contract
//! - [`MemoryProgressStore`] - in-process store
//! - [`FileProgressStore`] - one YAML file per user

pub mod file;
pub mod state;
pub mod store;

pub use file::{FileProgressStore, DEFAULT_STALE_LOCK_AGE};
pub use state::ProgressState;
pub use store::{MemoryProgressStore, ProgressStore};
