//! Version store
//!
//! `VersionStore` is the only component that touches the index or the record
//! files. Every operation that rewrites the index runs inside the store's
//! [`IndexLock`].
//!
//! # Write order
//!
//! Records are the source of truth and the index is a cache over them:
//! - `save` writes (and fsyncs) the record, then the index
//! - `delete` removes the record, then the index entry
//! - `update_metadata` rewrites the record, then refreshes the index entry
//!
//! A crash between the two steps leaves an orphan record or a stale entry;
//! [`VersionStore::reconcile`] repairs both. When a mutation finds the index
//! unreadable it rebuilds it from the record files before proceeding.
//!
//! # Sequence numbers
//!
//! `save` raises the `versions.seq` sidecar before writing the record. The
//! index keeps its own copy of the mark, and every read-modify-write takes
//! the larger of the two, so a number freed by deleting the newest version
//! is not handed out again even if the index is lost.

use crate::config::StoreConfig;
use crate::reconcile::{MetadataOnly, ReconcileReport};
use crate::stats::StorageStats;
use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::path::Path;
use tailor_core::{
    timestamp_now, FinalContent, GenerationResult, MetadataPatch, OptimizationResult,
    ResumeContent, VaultError, VaultResult, VersionComparison, VersionFilter, VersionId,
    VersionMetadata, VersionRecord,
};
use tailor_storage::{
    IndexFile, IndexLock, MetadataIndex, RecordFiles, SequenceMark, StorageLayout,
};

// =============================================================================
// NewVersion
// =============================================================================

/// Everything a caller supplies to create a version
///
/// Style and tier fall back to the store's configured defaults.
#[derive(Debug, Clone)]
pub struct NewVersion<R = OptimizationResult, C = ResumeContent> {
    /// Generation result, stored verbatim
    pub result: R,
    /// Final document content
    pub content: C,
    /// Target job title
    pub job_title: String,
    /// Target company
    pub company_name: String,
    /// Job description text
    pub job_description: String,
    /// Original document text
    pub original_text: String,
    /// Optimization style
    pub style: Option<String>,
    /// Optimization tier
    pub tier: Option<String>,
    /// Initial notes
    pub notes: Option<String>,
    /// Initial tags
    pub tags: Vec<String>,
}

impl<R, C> NewVersion<R, C> {
    /// Required inputs; optional fields are set with the builder methods
    pub fn new(
        result: R,
        content: C,
        job_title: impl Into<String>,
        company_name: impl Into<String>,
        job_description: impl Into<String>,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            result,
            content,
            job_title: job_title.into(),
            company_name: company_name.into(),
            job_description: job_description.into(),
            original_text: original_text.into(),
            style: None,
            tier: None,
            notes: None,
            tags: Vec::new(),
        }
    }

    /// Set the optimization style
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the optimization tier
    pub fn tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Set notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

// =============================================================================
// DeleteOutcome
// =============================================================================

/// How a successful delete went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Record file and index entry both removed
    Removed {
        /// Sequence number of the deleted version
        version_number: u64,
    },
    /// Record file removed, but the index had no entry for it
    RemovedUnindexed,
}

impl DeleteOutcome {
    /// Message for the caller
    pub fn message(&self) -> String {
        match self {
            DeleteOutcome::Removed { version_number } => {
                format!("Version {} deleted successfully", version_number)
            }
            DeleteOutcome::RemovedUnindexed => {
                "Record deleted; index entry was already missing".to_string()
            }
        }
    }
}

// =============================================================================
// VersionStore
// =============================================================================

/// Persistent store of version records in one directory
pub struct VersionStore<R = OptimizationResult, C = ResumeContent> {
    config: StoreConfig,
    layout: StorageLayout,
    index: MetadataIndex,
    records: RecordFiles,
    sequence: SequenceMark,
    lock: IndexLock,
    _payload: PhantomData<fn() -> (R, C)>,
}

impl<R, C> std::fmt::Debug for VersionStore<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionStore")
            .field("path", &self.layout.base())
            .field("file_lock", &self.lock.uses_file_lock())
            .finish()
    }
}

impl<R, C> VersionStore<R, C>
where
    R: GenerationResult,
    C: FinalContent,
{
    /// Open (creating if needed) the store described by `config`
    pub fn open(config: StoreConfig) -> VaultResult<Self> {
        let layout = StorageLayout::new(&config.storage_path);
        layout.ensure()?;

        let index = MetadataIndex::new(&layout).with_pretty(config.pretty_json);
        let records = RecordFiles::new(layout.clone()).with_pretty(config.pretty_json);
        let sequence = SequenceMark::new(&layout);
        let lock = if config.file_lock {
            IndexLock::with_file(layout.lock_path())
        } else {
            IndexLock::in_process()
        };

        tracing::info!(
            target: "tailor::store",
            path = %layout.base().display(),
            file_lock = config.file_lock,
            "Opened version store"
        );

        Ok(Self {
            config,
            layout,
            index,
            records,
            sequence,
            lock,
            _payload: PhantomData,
        })
    }

    /// Open the store at `path`, honoring `<path>/vault.toml`
    pub fn open_path(path: impl AsRef<Path>) -> VaultResult<Self> {
        Self::open(StoreConfig::load(path)?)
    }

    /// Configuration in effect
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Base directory
    pub fn path(&self) -> &Path {
        self.layout.base()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Persist a new version and return its metadata
    pub fn save(&self, new: NewVersion<R, C>) -> VaultResult<VersionMetadata> {
        let _guard = self.lock.acquire()?;
        let mut index = self.index_for_write()?;

        let stats = new.result.change_stats();
        let metadata = VersionMetadata {
            version_id: self.fresh_id(),
            version_number: index.next_sequence(),
            timestamp: timestamp_now(),
            job_title: new.job_title,
            company_name: new.company_name,
            optimization_style: new
                .style
                .unwrap_or_else(|| self.config.default_style.clone()),
            optimization_tier: new.tier.unwrap_or_else(|| self.config.default_tier.clone()),
            total_changes: stats.total,
            accepted_changes: stats.accepted,
            rejected_changes: stats.rejected,
            notes: new.notes,
            tags: new.tags,
            is_submitted: false,
            submitted_date: None,
            response_received: None,
        };
        let id = metadata.version_id;

        let record = VersionRecord {
            metadata: metadata.clone(),
            optimization_result: new.result,
            final_content: new.content,
            job_description: new.job_description,
            original_text: new.original_text,
        };
        self.sequence.advance(metadata.version_number)?;
        self.records.write(&id, &record)?;

        index.upsert(metadata.clone());
        if let Err(e) = self.index.save(&mut index) {
            tracing::error!(
                target: "tailor::store",
                version_id = %id,
                error = %e,
                "Record written but index update failed; run reconcile to restore it"
            );
            return Err(e);
        }

        tracing::info!(
            target: "tailor::store",
            version_id = %id,
            version_number = metadata.version_number,
            company = %metadata.company_name,
            "Saved version"
        );
        Ok(metadata)
    }

    /// Load the full record for `id`
    ///
    /// Reads the record file only; the index is not consulted.
    pub fn load(&self, id: &VersionId) -> VaultResult<VersionRecord<R, C>> {
        let record: VersionRecord<R, C> = self.records.read(id).map_err(|e| {
            if !e.is_not_found() {
                tracing::warn!(target: "tailor::store", version_id = %id, error = %e, "Failed to load version");
            }
            e
        })?;
        if record.metadata.version_id != *id {
            return Err(VaultError::corrupt_record(
                id,
                format!("file holds version {}", record.metadata.version_id),
            ));
        }
        Ok(record)
    }

    /// Indexed metadata matching `filter`, newest first
    ///
    /// Ties on timestamp are broken by descending sequence number. Reads the
    /// index only; an unreadable index lists nothing.
    pub fn list(&self, filter: &VersionFilter) -> Vec<VersionMetadata> {
        let index = self.index.load();
        let mut versions: Vec<VersionMetadata> = index
            .versions
            .into_values()
            .filter(|m| filter.matches(m))
            .collect();
        versions.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.version_number.cmp(&a.version_number))
        });
        versions
    }

    /// Indexed metadata for `id`, without opening the record
    pub fn metadata(&self, id: &VersionId) -> VaultResult<VersionMetadata> {
        self.index
            .load()
            .versions
            .remove(id)
            .ok_or_else(|| VaultError::not_found(id))
    }

    /// Delete the version `id`
    ///
    /// A missing record file is NotFound and leaves the index alone. A record
    /// with no index entry is still deleted, reported as
    /// [`DeleteOutcome::RemovedUnindexed`].
    pub fn delete(&self, id: &VersionId) -> VaultResult<DeleteOutcome> {
        let _guard = self.lock.acquire()?;
        self.records.remove(id)?;

        let mut index = self.index_for_write()?;
        match index.remove(id) {
            Some(removed) => {
                self.index.save(&mut index)?;
                tracing::info!(
                    target: "tailor::store",
                    version_id = %id,
                    version_number = removed.version_number,
                    "Deleted version"
                );
                Ok(DeleteOutcome::Removed {
                    version_number: removed.version_number,
                })
            }
            None => {
                tracing::warn!(
                    target: "tailor::store",
                    version_id = %id,
                    "Deleted record had no index entry"
                );
                Ok(DeleteOutcome::RemovedUnindexed)
            }
        }
    }

    /// Apply `patch` to the mutable metadata of `id`
    ///
    /// Rewrites the record, then refreshes (or re-inserts) its index entry.
    /// An empty patch changes nothing and writes nothing.
    pub fn update_metadata(
        &self,
        id: &VersionId,
        patch: &MetadataPatch,
    ) -> VaultResult<VersionMetadata> {
        let _guard = self.lock.acquire()?;
        let mut record = self.load(id)?;
        if patch.is_empty() {
            return Ok(record.metadata);
        }

        patch.apply(&mut record.metadata);
        self.records.write(id, &record)?;

        let mut index = self.index_for_write()?;
        if index.upsert(record.metadata.clone()).is_none() {
            tracing::warn!(
                target: "tailor::store",
                version_id = %id,
                "Updated version was missing from the index; re-added"
            );
        }
        self.index.save(&mut index)?;

        tracing::info!(
            target: "tailor::store",
            version_id = %id,
            version_number = record.metadata.version_number,
            "Updated version metadata"
        );
        Ok(record.metadata)
    }

    /// Load `a` and `b` for comparison; `a` is the baseline
    ///
    /// Comparing a version with itself is allowed and yields zero deltas.
    pub fn compare(&self, a: &VersionId, b: &VersionId) -> VaultResult<VersionComparison<R, C>> {
        let version_a = self.load(a)?;
        let version_b = self.load(b)?;
        Ok(VersionComparison::new(version_a, version_b))
    }

    /// Counts, sizes and freshness of the vault
    ///
    /// The version count comes from the index; the byte total covers every
    /// record file in the directory, so orphans and records behind a
    /// corrupt index are still counted.
    pub fn storage_stats(&self) -> StorageStats {
        let index = self.index.load();
        let on_disk = match self.records.scan_ids() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(target: "tailor::store", error = %e, "Cannot scan record files, sizing indexed records only");
                index.versions.keys().copied().collect()
            }
        };
        let total_size_bytes = on_disk.iter().filter_map(|id| self.records.size(id)).sum();
        StorageStats::new(
            index.len(),
            total_size_bytes,
            self.layout.base().to_path_buf(),
            index.last_updated,
        )
    }

    /// Distinct tags across all indexed versions, sorted
    pub fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .index
            .load()
            .versions
            .into_values()
            .flat_map(|m| m.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// Bring the index in line with the record files on disk
    ///
    /// Unindexed records are added back, entries without a record file are
    /// dropped, and record files that cannot be parsed are reported but left
    /// in place.
    pub fn reconcile(&self) -> VaultResult<ReconcileReport> {
        let _guard = self.lock.acquire()?;
        let mut index = self.index.load();
        let mut report = ReconcileReport::default();
        let mark_raised = index.raise_high_water_mark(self.sequence.load());

        let on_disk: BTreeSet<VersionId> = self.records.scan_ids()?.into_iter().collect();

        for id in &on_disk {
            if index.contains(id) {
                continue;
            }
            match self.read_metadata(id) {
                Ok(metadata) => {
                    index.upsert(metadata);
                    report.restored.push(*id);
                }
                Err(e) => {
                    tracing::warn!(target: "tailor::store", version_id = %id, error = %e, "Skipping unreadable record");
                    report.unreadable.push(*id);
                }
            }
        }

        let stale: Vec<VersionId> = index
            .versions
            .keys()
            .filter(|id| !on_disk.contains(*id))
            .copied()
            .collect();
        for id in stale {
            index.remove(&id);
            report.dropped.push(id);
        }

        if report.changed_index() || mark_raised {
            self.index.save(&mut index)?;
        }
        self.sequence.advance(index.high_water_mark)?;
        tracing::info!(
            target: "tailor::store",
            restored = report.restored.len(),
            dropped = report.dropped.len(),
            unreadable = report.unreadable.len(),
            "Reconciled index"
        );
        Ok(report)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn fresh_id(&self) -> VersionId {
        loop {
            let id = VersionId::new();
            if !self.records.exists(&id) {
                return id;
            }
        }
    }

    fn read_metadata(&self, id: &VersionId) -> VaultResult<VersionMetadata> {
        let only: MetadataOnly = self.records.read(id)?;
        if only.metadata.version_id != *id {
            return Err(VaultError::corrupt_record(
                id,
                format!("file holds version {}", only.metadata.version_id),
            ));
        }
        Ok(only.metadata)
    }

    /// Index to mutate; rebuilt from the record files if unreadable
    ///
    /// The high-water mark is raised to the sidecar's. Must be called with
    /// the index lock held.
    fn index_for_write(&self) -> VaultResult<IndexFile> {
        let mut index = self.load_or_rebuild()?;
        index.raise_high_water_mark(self.sequence.load());
        Ok(index)
    }

    fn load_or_rebuild(&self) -> VaultResult<IndexFile> {
        match self.index.load_strict() {
            Ok(index) => Ok(index),
            Err(e) => {
                tracing::error!(
                    target: "tailor::index",
                    kind = %e.kind(),
                    error = %e,
                    "Index unusable, rebuilding from record files"
                );
                let mut index = IndexFile::new();
                for id in self.records.scan_ids()? {
                    match self.read_metadata(&id) {
                        Ok(metadata) => {
                            index.upsert(metadata);
                        }
                        Err(e) => {
                            tracing::warn!(target: "tailor::index", version_id = %id, error = %e, "Skipping unreadable record");
                        }
                    }
                }
                Ok(index)
            }
        }
    }
}
