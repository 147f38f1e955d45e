//! Sequence high-water mark sidecar
//!
//! `versions.seq` holds the largest sequence number ever assigned, as plain
//! decimal text. It duplicates the mark kept in the index so that a lost or
//! corrupt index cannot make a deleted version's number available again.

use crate::atomic::write_atomic;
use crate::layout::StorageLayout;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tailor_core::VaultResult;

/// Reads and writes the sequence sidecar of one vault
#[derive(Debug, Clone)]
pub struct SequenceMark {
    path: PathBuf,
}

impl SequenceMark {
    /// Sidecar handle for `layout`
    pub fn new(layout: &StorageLayout) -> Self {
        Self {
            path: layout.sequence_path(),
        }
    }

    /// Location of the sidecar
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored mark; 0 when the file is missing or unreadable
    pub fn load(&self) -> u64 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return 0,
            Err(e) => {
                tracing::warn!(target: "tailor::index", path = %self.path.display(), error = %e, "Sequence mark unreadable");
                return 0;
            }
        };
        match text.trim().parse() {
            Ok(mark) => mark,
            Err(e) => {
                tracing::warn!(target: "tailor::index", path = %self.path.display(), error = %e, "Sequence mark unparsable");
                0
            }
        }
    }

    /// Raise the stored mark to `mark`; never lowers it
    pub fn advance(&self, mark: u64) -> VaultResult<()> {
        if mark <= self.load() {
            return Ok(());
        }
        write_atomic(&self.path, format!("{}\n", mark).as_bytes())
    }
}
