//! Onboarding service facade.
//!
//! [`OnboardingService`] wires the pure controller to its two collaborators,
//! a [`TierLookup`] and a [`ProgressStore`], which are injected at
//! construction. Mutations are read-modify-write cycles guarded by the
//! store's revision check and retried with a fresh read on conflict.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::transitions::{mark_milestone, reset_all};
use super::view::{OnboardingSnapshot, OnboardingView};
use crate::access::AccessResolver;
use crate::catalog::{StepCatalog, StepDefinition};
use crate::config::OnboardConfig;
use crate::error::{OnboardError, Result};
use crate::progress::{ProgressState, ProgressStore};
use crate::sequencer::effective_steps;
use crate::subscription::TierLookup;

/// Default number of attempts for a conflicting mutation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default pause before the first retry; later retries wait longer.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(20);

/// Computes and mutates onboarding progress for users.
#[derive(Debug)]
pub struct OnboardingService<T, S> {
    tiers: T,
    store: S,
    catalog: StepCatalog,
    access: AccessResolver,
    max_attempts: u32,
    retry_backoff: Duration,
}

impl<T: TierLookup, S: ProgressStore> OnboardingService<T, S> {
    /// Create a service with the built-in catalog and tier table.
    pub fn new(tiers: T, store: S) -> Self {
        Self {
            tiers,
            store,
            catalog: StepCatalog::builtin(),
            access: AccessResolver::builtin(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }

    /// Create a service using the catalog, tiers and retry budget from config.
    pub fn from_config(tiers: T, store: S, config: &OnboardConfig) -> Result<Self> {
        Ok(Self::new(tiers, store)
            .with_catalog(config.catalog()?)
            .with_access(config.access_resolver()?)
            .with_max_attempts(config.settings.max_attempts))
    }

    /// Replace the step catalog.
    pub fn with_catalog(mut self, catalog: StepCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the tier table.
    pub fn with_access(mut self, access: AccessResolver) -> Self {
        self.access = access;
        self
    }

    /// Set the attempt budget for conflicting writes (at least one).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the base pause between conflicting attempts.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// The step catalog in use.
    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// The tier table in use.
    pub fn access(&self) -> &AccessResolver {
        &self.access
    }

    /// The progress store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The user's tier label and effective step list.
    pub fn effective_steps_for(&self, user_id: &str) -> Result<(String, Vec<StepDefinition>)> {
        let tier = self.tiers.tier_of(user_id)?;
        let capabilities = self.access.resolve_or_restrict(&tier);
        let effective = effective_steps(self.catalog.steps(), &capabilities);
        Ok((tier, effective))
    }

    /// Current onboarding view for a user.
    ///
    /// A user without a progress record gets a fresh zero state persisted.
    pub fn get_onboarding_view(&self, user_id: &str) -> Result<OnboardingView> {
        self.evaluate(user_id).map(|snapshot| snapshot.view)
    }

    /// Mark a milestone done and return the updated view.
    ///
    /// # Errors
    ///
    /// `UnknownFlag` for flags outside the catalog (nothing is written);
    /// `ConcurrentUpdate` once the attempt budget is spent.
    pub fn complete_milestone(&self, user_id: &str, flag: &str) -> Result<OnboardingView> {
        self.complete(user_id, flag).map(|snapshot| snapshot.view)
    }

    /// Clear every onboarding flag for a user and return the fresh view.
    ///
    /// Only onboarding flags are touched.
    pub fn reset_onboarding(&self, user_id: &str) -> Result<OnboardingView> {
        self.reset(user_id).map(|snapshot| snapshot.view)
    }

    /// Like [`get_onboarding_view`](Self::get_onboarding_view), also
    /// returning the effective list and record the view was computed from.
    #[instrument(skip(self))]
    pub fn evaluate(&self, user_id: &str) -> Result<OnboardingSnapshot> {
        let (tier, effective) = self.effective_steps_for(user_id)?;

        let progress = match self.store.load(user_id) {
            Ok(progress) => progress,
            Err(OnboardError::ProgressNotFound { .. }) => self.create(user_id)?,
            Err(e) => return Err(e),
        };

        let snapshot = OnboardingSnapshot::build(&tier, progress, effective);
        if snapshot.view.completed != snapshot.progress.completed {
            debug!(
                stored = snapshot.progress.completed,
                computed = snapshot.view.completed,
                "stored completion is stale for current tier"
            );
        }
        debug!(current = %snapshot.view.current_step, "evaluated onboarding");
        Ok(snapshot)
    }

    /// Like [`complete_milestone`](Self::complete_milestone), returning the
    /// full snapshot.
    #[instrument(skip(self))]
    pub fn complete(&self, user_id: &str, flag: &str) -> Result<OnboardingSnapshot> {
        if !self.catalog.has_milestone(flag) {
            return Err(OnboardError::UnknownFlag {
                flag: flag.to_string(),
            });
        }

        let (tier, effective) = self.effective_steps_for(user_id)?;
        let stored = self.mutate(user_id, |progress| {
            mark_milestone(progress, flag, &self.catalog, &effective)
        })?;

        let snapshot = OnboardingSnapshot::build(&tier, stored, effective);
        info!(current = %snapshot.view.current_step, "milestone completed");
        Ok(snapshot)
    }

    /// Like [`reset_onboarding`](Self::reset_onboarding), returning the
    /// full snapshot.
    #[instrument(skip(self))]
    pub fn reset(&self, user_id: &str) -> Result<OnboardingSnapshot> {
        let (tier, effective) = self.effective_steps_for(user_id)?;
        let stored = self.mutate(user_id, |progress| Ok(reset_all(progress)))?;

        let snapshot = OnboardingSnapshot::build(&tier, stored, effective);
        info!(current = %snapshot.view.current_step, "onboarding reset");
        Ok(snapshot)
    }

    /// Current record, or a zero state if the user has none yet.
    fn read_or_zero(&self, user_id: &str) -> Result<ProgressState> {
        match self.store.load(user_id) {
            Ok(progress) => Ok(progress),
            Err(OnboardError::ProgressNotFound { .. }) => Ok(ProgressState::new(&self.catalog)),
            Err(e) => Err(e),
        }
    }

    /// Persist a zero state for a new user.
    fn create(&self, user_id: &str) -> Result<ProgressState> {
        let zero = ProgressState::new(&self.catalog);
        match self.store.upsert(user_id, &zero, 0) {
            Ok(stored) => {
                info!("created onboarding progress");
                Ok(stored)
            }
            // Another writer got there first, or still holds the record;
            // show whatever is there now, or zero if nothing landed yet.
            Err(OnboardError::ConcurrentUpdate { .. }) => {
                debug!("progress creation raced another writer");
                self.read_or_zero(user_id)
            }
            Err(e) => Err(e),
        }
    }

    /// Pause before retry number `attempt` (1-based).
    fn backoff(&self, attempt: u32) -> Duration {
        self.retry_backoff * attempt
    }

    /// Read-modify-write with bounded retry on revision conflicts.
    fn mutate<F>(&self, user_id: &str, apply: F) -> Result<ProgressState>
    where
        F: Fn(&ProgressState) -> Result<ProgressState>,
    {
        let mut attempt = 1;
        loop {
            let current = self.read_or_zero(user_id)?;
            let next = apply(&current)?;

            match self.store.upsert(user_id, &next, current.revision) {
                Ok(stored) => return Ok(stored),
                Err(OnboardError::ConcurrentUpdate { .. }) if attempt < self.max_attempts => {
                    let pause = self.backoff(attempt);
                    warn!(
                        attempt,
                        max = self.max_attempts,
                        pause_ms = pause.as_millis() as u64,
                        "write conflict, retrying"
                    );
                    thread::sleep(pause);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
