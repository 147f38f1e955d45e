//! Record files
//!
//! Each version lives in `<base>/<id>.json`. Records are the source of truth:
//! they are written before the index and can rebuild it. A record that fails
//! to parse only affects operations on that record.

use crate::atomic::write_atomic;
use crate::layout::StorageLayout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use tailor_core::{VaultError, VaultResult, VersionId};

/// Access to the record files of one vault
#[derive(Debug, Clone)]
pub struct RecordFiles {
    layout: StorageLayout,
    pretty: bool,
}

impl RecordFiles {
    /// Record access for `layout`
    pub fn new(layout: StorageLayout) -> Self {
        Self {
            layout,
            pretty: true,
        }
    }

    /// Choose between pretty-printed and compact JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The layout these records live in
    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// True if a record file exists for `id`
    pub fn exists(&self, id: &VersionId) -> bool {
        self.layout.record_path(id).is_file()
    }

    /// Write (or replace) the record for `id`
    pub fn write<T: Serialize>(&self, id: &VersionId, record: &T) -> VaultResult<()> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(record)
        } else {
            serde_json::to_vec(record)
        }
        .map_err(|e| VaultError::corrupt_record(id, e))?;
        write_atomic(&self.layout.record_path(id), &bytes)
    }

    /// Read the record for `id`
    ///
    /// Missing file → NotFound, unreadable → I/O failure, unparsable →
    /// CorruptRecord.
    pub fn read<T: DeserializeOwned>(&self, id: &VersionId) -> VaultResult<T> {
        let path = self.layout.record_path(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(VaultError::not_found(id));
            }
            Err(e) => {
                return Err(VaultError::io(format!("reading record {}", id), e));
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| VaultError::corrupt_record(id, e))
    }

    /// Remove the record for `id`; NotFound if there is none
    pub fn remove(&self, id: &VersionId) -> VaultResult<()> {
        match fs::remove_file(self.layout.record_path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(VaultError::not_found(id)),
            Err(e) => Err(VaultError::io(format!("removing record {}", id), e)),
        }
    }

    /// Size in bytes of the record for `id`, if the file exists
    pub fn size(&self, id: &VersionId) -> Option<u64> {
        fs::metadata(self.layout.record_path(id))
            .ok()
            .filter(|m| m.is_file())
            .map(|m| m.len())
    }

    /// Ids of every record file in the directory, sorted
    ///
    /// Files that are not named `<uuid>.json` are ignored.
    pub fn scan_ids(&self) -> VaultResult<Vec<VersionId>> {
        let entries = match fs::read_dir(self.layout.base()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(VaultError::io(
                    format!("scanning {}", self.layout.base().display()),
                    e,
                ))
            }
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                VaultError::io(format!("scanning {}", self.layout.base().display()), e)
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(id) = StorageLayout::record_id_of(&path) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}
