//! Command results.

use tailor_core::{
    OptimizationResult, ResumeContent, VersionComparison, VersionId, VersionMetadata,
    VersionRecord,
};
use tailor_engine::{DeleteOutcome, ReconcileReport, StorageStats};

/// Successful result of a [`Command`](crate::Command)
#[derive(Debug, Clone)]
pub enum Output {
    /// A version was saved
    Saved {
        /// New identifier
        version_id: VersionId,
        /// Assigned sequence number
        version_number: u64,
    },
    /// A full record
    Record(Box<VersionRecord<OptimizationResult, ResumeContent>>),
    /// Listed metadata, newest first
    Versions(Vec<VersionMetadata>),
    /// A version was deleted
    Deleted(DeleteOutcome),
    /// Metadata after an update
    Updated(VersionMetadata),
    /// Two loaded versions
    Comparison(Box<VersionComparison<OptimizationResult, ResumeContent>>),
    /// Storage statistics
    Stats(StorageStats),
    /// Reconciliation result
    Reconciled(ReconcileReport),
    /// Distinct tags
    Tags(Vec<String>),
}

impl Output {
    /// Human-readable summary used as the success message
    pub fn message(&self) -> String {
        match self {
            Output::Saved { version_number, .. } => {
                format!("Version {} saved successfully", version_number)
            }
            Output::Record(record) => format!("Loaded {}", record.metadata.short_name()),
            Output::Versions(versions) => match versions.len() {
                1 => "1 version".to_string(),
                n => format!("{} versions", n),
            },
            Output::Deleted(outcome) => outcome.message(),
            Output::Updated(_) => "Metadata updated successfully".to_string(),
            Output::Comparison(cmp) => format!(
                "Compared {} with {}",
                cmp.version_a.metadata.short_name(),
                cmp.version_b.metadata.short_name()
            ),
            Output::Stats(stats) => stats.to_string(),
            Output::Reconciled(report) => format!(
                "Reconciled index: {} restored, {} dropped, {} unreadable",
                report.restored.len(),
                report.dropped.len(),
                report.unreadable.len()
            ),
            Output::Tags(tags) => format!("{} tags", tags.len()),
        }
    }
}
