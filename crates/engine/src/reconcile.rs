//! Index reconciliation
//!
//! Records are written before the index, so a crash between the two leaves
//! a record that no listing shows. Reconciliation walks the record files and
//! brings the index back in line with them.

use serde::{Deserialize, Serialize};
use tailor_core::{VersionId, VersionMetadata};

/// What a reconciliation pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Records found on disk and added back to the index
    pub restored: Vec<VersionId>,
    /// Index entries removed because their record file is gone
    pub dropped: Vec<VersionId>,
    /// Record files that could not be read or parsed
    pub unreadable: Vec<VersionId>,
}

impl ReconcileReport {
    /// True if the index already matched the record files
    pub fn is_clean(&self) -> bool {
        self.restored.is_empty() && self.dropped.is_empty() && self.unreadable.is_empty()
    }

    /// True if the index was modified
    pub fn changed_index(&self) -> bool {
        !self.restored.is_empty() || !self.dropped.is_empty()
    }
}

/// The metadata half of a record file
///
/// Used when only the metadata is needed, so reconciliation works whatever
/// the payload types are.
#[derive(Debug, Deserialize)]
pub(crate) struct MetadataOnly {
    pub(crate) metadata: VersionMetadata,
}
