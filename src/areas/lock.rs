//! Repository-wide write lock
//!
//! Commands that mutate the index or history hold an exclusive OS lock on
//! `.lgit/lock` for their whole critical section. The lock is released when
//! the guard is dropped.

use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;

pub struct RepositoryLock {
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the exclusive lock on `path` is acquired
    pub fn acquire(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("failed to open lock file at {:?}", path))?;

        let guard = file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock {:?}", path))?;
        tracing::debug!(path = %path.display(), "repository locked");

        Ok(RepositoryLock { _guard: guard })
    }
}

impl std::fmt::Debug for RepositoryLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryLock").finish_non_exhaustive()
    }
}
