//! Progress store contract and in-memory implementation.
//!
//! Stores implement compare-and-swap on a per-user revision counter so that
//! two writers racing on the same record cannot silently revert each
//! other's flags.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::ProgressState;
use crate::error::{OnboardError, Result};

/// Durable per-user progress storage.
pub trait ProgressStore {
    /// Fetch a user's progress, if any.
    fn get(&self, user_id: &str) -> Result<Option<ProgressState>>;

    /// Write a user's progress if the stored revision still equals
    /// `expected_revision` (0 when the record must not exist yet).
    ///
    /// Returns the stored record with its new revision.
    ///
    /// # Errors
    ///
    /// `ConcurrentUpdate` when the revision moved on; `StoreUnavailable`
    /// when nothing could be written.
    fn upsert(
        &self,
        user_id: &str,
        state: &ProgressState,
        expected_revision: u64,
    ) -> Result<ProgressState>;

    /// Fetch a user's progress, failing with `ProgressNotFound` if absent.
    fn load(&self, user_id: &str) -> Result<ProgressState> {
        self.get(user_id)?
            .ok_or_else(|| OnboardError::ProgressNotFound {
                user_id: user_id.to_string(),
            })
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for &S {
    fn get(&self, user_id: &str) -> Result<Option<ProgressState>> {
        (**self).get(user_id)
    }

    fn upsert(
        &self,
        user_id: &str,
        state: &ProgressState,
        expected_revision: u64,
    ) -> Result<ProgressState> {
        (**self).upsert(user_id, state, expected_revision)
    }
}

/// Stamp a record for storage at the next revision.
pub(crate) fn next_revision(state: &ProgressState, expected_revision: u64) -> ProgressState {
    let mut stored = state.clone();
    stored.revision = expected_revision + 1;
    stored.updated_at = Some(Utc::now());
    stored
}

/// Process-local store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    records: Mutex<HashMap<String, ProgressState>>,
}

impl MemoryProgressStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, ProgressState>>> {
        self.records
            .lock()
            .map_err(|_| OnboardError::StoreUnavailable {
                message: "progress store lock poisoned".to_string(),
            })
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self, user_id: &str) -> Result<Option<ProgressState>> {
        Ok(self.lock()?.get(user_id).cloned())
    }

    fn upsert(
        &self,
        user_id: &str,
        state: &ProgressState,
        expected_revision: u64,
    ) -> Result<ProgressState> {
        let mut records = self.lock()?;

        let current = records.get(user_id).map(|r| r.revision).unwrap_or(0);
        if current != expected_revision {
            return Err(OnboardError::ConcurrentUpdate {
                user_id: user_id.to_string(),
            });
        }

        let stored = next_revision(state, expected_revision);
        records.insert(user_id.to_string(), stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StepCatalog;

    fn zero() -> ProgressState {
        ProgressState::new(&StepCatalog::builtin())
    }

    #[test]
    fn get_missing_returns_none() {
        let store = MemoryProgressStore::new();
        assert!(store.get("nobody").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn load_missing_is_progress_not_found() {
        let store = MemoryProgressStore::new();
        let err = store.load("nobody").unwrap_err();
        assert!(matches!(err, OnboardError::ProgressNotFound { .. }));
    }

    #[test]
    fn first_upsert_creates_revision_one() {
        let store = MemoryProgressStore::new();
        let stored = store.upsert("u1", &zero(), 0).unwrap();

        assert_eq!(stored.revision, 1);
        assert!(stored.updated_at.is_some());
        assert_eq!(store.get("u1").unwrap().unwrap(), stored);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn upsert_with_stale_revision_conflicts() {
        let store = MemoryProgressStore::new();
        store.upsert("u1", &zero(), 0).unwrap();
        store.upsert("u1", &zero(), 1).unwrap();

        let err = store.upsert("u1", &zero(), 1).unwrap_err();
        assert!(matches!(err, OnboardError::ConcurrentUpdate { .. }));
        assert_eq!(store.get("u1").unwrap().unwrap().revision, 2);
    }

    #[test]
    fn create_races_conflict() {
        let store = MemoryProgressStore::new();
        store.upsert("u1", &zero(), 0).unwrap();
        assert!(store.upsert("u1", &zero(), 0).is_err());
    }

    #[test]
    fn users_are_independent() {
        let store = MemoryProgressStore::new();
        store.upsert("a", &zero(), 0).unwrap();
        store.upsert("b", &zero(), 0).unwrap();
        assert_eq!(store.len(), 2);
    }
}
