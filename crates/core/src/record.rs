//! Full version records
//!
//! A `VersionRecord` is what gets written to `<id>.json`: the metadata plus
//! every payload needed to reproduce the version. The JSON keys are fixed
//! (`metadata`, `optimization_result`, `final_resume`, `job_description`,
//! `original_resume_text`) so existing stores stay readable.

use crate::metadata::VersionMetadata;
use crate::optimization::OptimizationResult;
use crate::resume::ResumeContent;
use crate::traits::{FinalContent, GenerationResult};
use serde::{Deserialize, Serialize};

/// Persisted snapshot of one version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "R: Serialize, C: Serialize",
    deserialize = "R: serde::de::DeserializeOwned, C: serde::de::DeserializeOwned"
))]
pub struct VersionRecord<R = OptimizationResult, C = ResumeContent> {
    /// Descriptive metadata (also mirrored in the index)
    pub metadata: VersionMetadata,
    /// Generation result, stored verbatim
    pub optimization_result: R,
    /// Final document content
    #[serde(rename = "final_resume")]
    pub final_content: C,
    /// Job description the version was generated for
    #[serde(default)]
    pub job_description: String,
    /// Source document text before optimization
    #[serde(rename = "original_resume_text", default)]
    pub original_text: String,
}

/// Numeric view of a record's metrics and change counts
///
/// Missing scores are reported as 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Aggregate score
    pub overall_score: f64,
    /// Authenticity score
    pub authenticity_score: f64,
    /// Role alignment score
    pub role_alignment_score: f64,
    /// ATS score
    pub ats_score: f64,
    /// Total proposed changes
    pub total_changes: i64,
    /// Accepted changes
    pub accepted_changes: i64,
    /// Rejected changes
    pub rejected_changes: i64,
}

impl<R, C> VersionRecord<R, C>
where
    R: GenerationResult,
    C: FinalContent,
{
    /// Metric scores from the generation result and counts from metadata
    ///
    /// Counts come from the metadata rather than the payload, since they were
    /// fixed at save time.
    pub fn metrics_summary(&self) -> MetricsSummary {
        let metrics = self.optimization_result.metrics();
        MetricsSummary {
            overall_score: metrics.overall_score.unwrap_or(0.0),
            authenticity_score: metrics.authenticity_score.unwrap_or(0.0),
            role_alignment_score: metrics.role_alignment_score.unwrap_or(0.0),
            ats_score: metrics.ats_score.unwrap_or(0.0),
            total_changes: i64::from(self.metadata.total_changes),
            accepted_changes: i64::from(self.metadata.accepted_changes),
            rejected_changes: i64::from(self.metadata.rejected_changes),
        }
    }

    /// Skills joined for display, in order and without dedup
    pub fn skills_text(&self) -> String {
        self.final_content.skills().join(", ")
    }
}
