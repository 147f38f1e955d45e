//! Index critical section
//!
//! Every index read-modify-write runs while holding an [`IndexGuard`]. The
//! guard always holds the store's in-process mutex; when file locking is
//! enabled it also holds an exclusive advisory lock on `versions.lock` so
//! several processes can share one vault directory.

use fs2::FileExt;
use parking_lot::{Mutex, MutexGuard};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use tailor_core::{VaultError, VaultResult};

/// Mutual exclusion for index mutations
#[derive(Debug)]
pub struct IndexLock {
    mutex: Mutex<()>,
    lock_file: Option<PathBuf>,
}

/// Held while the index is being modified; releases on drop
#[derive(Debug)]
pub struct IndexGuard<'a> {
    _guard: MutexGuard<'a, ()>,
    file: Option<File>,
}

impl IndexLock {
    /// In-process lock only
    pub fn in_process() -> Self {
        Self {
            mutex: Mutex::new(()),
            lock_file: None,
        }
    }

    /// In-process lock plus an advisory lock on `path`
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            mutex: Mutex::new(()),
            lock_file: Some(path.into()),
        }
    }

    /// True if a file lock is taken in addition to the mutex
    pub fn uses_file_lock(&self) -> bool {
        self.lock_file.is_some()
    }

    /// Enter the critical section, blocking until it is free
    pub fn acquire(&self) -> VaultResult<IndexGuard<'_>> {
        let guard = self.mutex.lock();
        let file = match &self.lock_file {
            None => None,
            Some(path) => {
                let context = || format!("locking {}", path.display());
                let file = OpenOptions::new()
                    .create(true)
                    .read(true)
                    .write(true)
                    .open(path)
                    .map_err(|e| VaultError::io(context(), e))?;
                FileExt::lock_exclusive(&file)
                    .map_err(|e| VaultError::io(context(), e))?;
                Some(file)
            }
        };
        Ok(IndexGuard {
            _guard: guard,
            file,
        })
    }
}

impl Drop for IndexGuard<'_> {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = FileExt::unlock(&file) {
                tracing::warn!(target: "tailor::index", error = %e, "Failed to release index file lock");
            }
        }
    }
}
