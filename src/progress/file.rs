//! File-backed progress store.
//!
//! Each user's record lives in its own YAML file, named by a hash of the
//! user id so arbitrary ids map to safe file names. Writes hold an
//! exclusive lock file for the read-check-write sequence and land through
//! a temp-file rename, so a record on disk is never partially written.
//! A lock left behind by a writer that died is broken once it is older
//! than the store's stale-lock age.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::store::next_revision;
use super::{ProgressState, ProgressStore};
use crate::error::{OnboardError, Result};

/// On-disk document: the state plus the id it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProgressRecord {
    user_id: String,

    #[serde(flatten)]
    state: ProgressState,
}

/// Age after which a leftover lock file is considered abandoned.
pub const DEFAULT_STALE_LOCK_AGE: Duration = Duration::from_secs(30);

/// Progress store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    dir: PathBuf,
    stale_lock_age: Duration,
}

impl FileProgressStore {
    /// Create a store writing under `dir` (created on first write).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stale_lock_age: DEFAULT_STALE_LOCK_AGE,
        }
    }

    /// Break lock files older than `age`.
    pub fn with_stale_lock_age(mut self, age: Duration) -> Self {
        self.stale_lock_age = age;
        self
    }

    /// Directory holding the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a user's record.
    pub fn record_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{}.yml", user_key(user_id)))
    }

    /// Path of a user's write lock.
    pub fn lock_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{}.lock", user_key(user_id)))
    }

    fn read(&self, user_id: &str) -> Result<Option<ProgressState>> {
        let path = self.record_path(user_id);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(unavailable(&path, e)),
        };

        let record: ProgressRecord =
            serde_yaml::from_str(&content).map_err(|e| OnboardError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        if record.user_id != user_id {
            return Err(OnboardError::StoreUnavailable {
                message: format!(
                    "record {} belongs to '{}', not '{}'",
                    path.display(),
                    record.user_id,
                    user_id
                ),
            });
        }

        Ok(Some(record.state))
    }
}

impl ProgressStore for FileProgressStore {
    fn get(&self, user_id: &str) -> Result<Option<ProgressState>> {
        self.read(user_id)
    }

    fn upsert(
        &self,
        user_id: &str,
        state: &ProgressState,
        expected_revision: u64,
    ) -> Result<ProgressState> {
        fs::create_dir_all(&self.dir).map_err(|e| unavailable(&self.dir, e))?;

        let _lock = LockFile::acquire(self.lock_path(user_id), user_id, self.stale_lock_age)?;

        let current = self.read(user_id)?.map(|s| s.revision).unwrap_or(0);
        if current != expected_revision {
            return Err(OnboardError::ConcurrentUpdate {
                user_id: user_id.to_string(),
            });
        }

        let stored = next_revision(state, expected_revision);
        let record = ProgressRecord {
            user_id: user_id.to_string(),
            state: stored.clone(),
        };
        let content = serde_yaml::to_string(&record).map_err(|e| OnboardError::StoreUnavailable {
            message: format!("Failed to serialize progress: {}", e),
        })?;

        let path = self.record_path(user_id);
        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, &content).map_err(|e| unavailable(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| unavailable(&path, e))?;

        tracing::debug!(user_id = %user_id, revision = stored.revision, "wrote progress record");
        Ok(stored)
    }
}

/// Exclusive per-user write lock, released on drop.
#[derive(Debug)]
struct LockFile {
    path: PathBuf,
}

impl LockFile {
    /// Take the lock, breaking it once if it is stale.
    fn acquire(path: PathBuf, user_id: &str, stale_age: Duration) -> Result<Self> {
        let mut broke_stale = false;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(Self { path }),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if broke_stale || !Self::is_stale(&path, stale_age) {
                        return Err(OnboardError::ConcurrentUpdate {
                            user_id: user_id.to_string(),
                        });
                    }
                    tracing::warn!(path = %path.display(), "breaking stale progress lock");
                    match fs::remove_file(&path) {
                        Ok(()) => {}
                        Err(e) if e.kind() == ErrorKind::NotFound => {}
                        Err(e) => return Err(unavailable(&path, e)),
                    }
                    broke_stale = true;
                }
                Err(e) => return Err(unavailable(&path, e)),
            }
        }
    }

    /// Whether the lock at `path` was last touched at least `age` ago.
    fn is_stale(path: &Path, age: Duration) -> bool {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|modified| modified.elapsed().ok())
            .is_some_and(|elapsed| elapsed >= age)
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), "failed to release lock: {}", e);
        }
    }
}

/// 16 hex chars (8 bytes of SHA256) of the user id.
fn user_key(user_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

fn unavailable(path: &Path, e: std::io::Error) -> OnboardError {
    OnboardError::StoreUnavailable {
        message: format!("{}: {}", path.display(), e),
    }
}
