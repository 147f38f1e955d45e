//! Metadata index
//!
//! The index is a cache over the record files: it maps every version id to
//! its metadata so listing never has to open a record. Losing it is not
//! fatal. A missing or unparsable index loads as empty (and is logged), and
//! `reconcile` can rebuild it from the record files.
//!
//! # Sequence numbers
//!
//! Besides the entries, the index persists a high-water mark: the largest
//! sequence number ever handed out. `next_sequence` is one past the larger of
//! that mark and the largest number still present, so deleting the newest
//! version never frees its number for reuse.

use crate::atomic::write_atomic;
use crate::layout::StorageLayout;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tailor_core::{timestamp_now, VaultError, VaultResult, VersionId, VersionMetadata};

// =============================================================================
// IndexFile
// =============================================================================

/// In-memory form of `versions_index.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFile {
    /// Metadata keyed by version id
    #[serde(default)]
    pub versions: BTreeMap<VersionId, VersionMetadata>,
    /// When the index was last written; `None` if never
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Largest sequence number ever assigned
    #[serde(default)]
    pub high_water_mark: u64,
}

impl IndexFile {
    /// Empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// True if no versions are indexed
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Metadata for `id`
    pub fn get(&self, id: &VersionId) -> Option<&VersionMetadata> {
        self.versions.get(id)
    }

    /// True if `id` is indexed
    pub fn contains(&self, id: &VersionId) -> bool {
        self.versions.contains_key(id)
    }

    /// All indexed metadata, in id order
    pub fn entries(&self) -> impl Iterator<Item = &VersionMetadata> {
        self.versions.values()
    }

    /// Sequence number for the next saved version (starts at 1)
    pub fn next_sequence(&self) -> u64 {
        let max_present = self
            .versions
            .values()
            .map(|m| m.version_number)
            .max()
            .unwrap_or(0);
        max_present.max(self.high_water_mark) + 1
    }

    /// Insert or replace the entry for `metadata.version_id`
    pub fn upsert(&mut self, metadata: VersionMetadata) -> Option<VersionMetadata> {
        self.high_water_mark = self.high_water_mark.max(metadata.version_number);
        self.versions.insert(metadata.version_id, metadata)
    }

    /// Raise the high-water mark to at least `mark`; true if it moved
    pub fn raise_high_water_mark(&mut self, mark: u64) -> bool {
        if mark > self.high_water_mark {
            self.high_water_mark = mark;
            true
        } else {
            false
        }
    }

    /// Remove the entry for `id`
    ///
    /// The high-water mark is left alone.
    pub fn remove(&mut self, id: &VersionId) -> Option<VersionMetadata> {
        self.versions.remove(id)
    }

    /// Refresh `last_updated`
    pub fn touch(&mut self) {
        self.last_updated = Some(timestamp_now());
    }
}

// =============================================================================
// MetadataIndex
// =============================================================================

/// Reads and writes the index file of one vault
#[derive(Debug, Clone)]
pub struct MetadataIndex {
    path: PathBuf,
    pretty: bool,
}

impl MetadataIndex {
    /// Index handle for `layout`
    pub fn new(layout: &StorageLayout) -> Self {
        Self {
            path: layout.index_path(),
            pretty: true,
        }
    }

    /// Choose between pretty-printed and compact JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Location of the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index, degrading to empty on any failure
    ///
    /// A missing file is the normal state of a fresh vault. Anything else
    /// (unreadable, unparsable) is logged as a corrupt index.
    pub fn load(&self) -> IndexFile {
        match self.load_strict() {
            Ok(index) => index,
            Err(e) => {
                tracing::error!(
                    target: "tailor::index",
                    path = %self.path.display(),
                    kind = %e.kind(),
                    error = %e,
                    "Index unusable, continuing with an empty index"
                );
                IndexFile::new()
            }
        }
    }

    /// Load the index, reporting read and parse failures
    ///
    /// A missing file still yields an empty index.
    pub fn load_strict(&self) -> VaultResult<IndexFile> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(IndexFile::new()),
            Err(e) => {
                return Err(VaultError::io(
                    format!("reading index {}", self.path.display()),
                    e,
                ))
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| VaultError::corrupt_index(&self.path, e))
    }

    /// Stamp `last_updated` and write the index atomically
    pub fn save(&self, index: &mut IndexFile) -> VaultResult<()> {
        index.touch();
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(index)
        } else {
            serde_json::to_vec(index)
        }
        .map_err(|e| VaultError::corrupt_index(&self.path, e))?;

        write_atomic(&self.path, &bytes)?;
        tracing::debug!(
            target: "tailor::index",
            path = %self.path.display(),
            versions = index.len(),
            "Index saved"
        );
        Ok(())
    }
}
