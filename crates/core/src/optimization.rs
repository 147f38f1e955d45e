//! Optimization result model
//!
//! The concrete generation result produced by the optimizer: a list of
//! proposed changes (each with a review status) and the quality metrics
//! computed for the optimized résumé. Unknown fields are carried through in
//! `extra` so the payload round-trips verbatim.

use crate::traits::{ChangeStats, GenerationResult, Metrics};
use serde::{Deserialize, Serialize};

/// Which part of the résumé a change touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Professional summary
    Summary,
    /// Headline
    Headline,
    /// A bullet under an experience entry
    ExperienceBullet,
    /// The skills list
    SkillsSection,
    /// An education entry
    Education,
    /// Anything else
    Other,
}

/// Review status of a proposed change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// Not reviewed yet
    #[default]
    Pending,
    /// Accepted as proposed
    Accepted,
    /// Rejected
    Rejected,
    /// Accepted with a user edit
    Edited,
}

/// A single proposed change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeChange {
    /// Change identifier, unique within one result
    pub id: String,
    /// Section the change applies to
    pub change_type: ChangeType,
    /// Human-readable location (e.g. "experience[0].bullets[2]")
    #[serde(default)]
    pub location: String,
    /// Text before the change
    #[serde(default)]
    pub before: String,
    /// Proposed text
    #[serde(default)]
    pub after: String,
    /// Why the change was proposed
    #[serde(default)]
    pub rationale: String,
    /// Review status
    #[serde(default)]
    pub status: ChangeStatus,
    /// User's replacement text when status is Edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_value: Option<String>,
    /// Flagged as potentially risky
    #[serde(default)]
    pub is_flagged: bool,
}

impl ResumeChange {
    /// Create a pending change
    pub fn new(
        id: impl Into<String>,
        change_type: ChangeType,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            change_type,
            location: String::new(),
            before: before.into(),
            after: after.into(),
            rationale: String::new(),
            status: ChangeStatus::Pending,
            edited_value: None,
            is_flagged: false,
        }
    }

    /// Set the review status
    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = status;
        self
    }

    /// True if still awaiting review
    pub fn is_pending(&self) -> bool {
        self.status == ChangeStatus::Pending
    }
}

/// Output of the optimization step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Proposed changes, in the order they were generated
    #[serde(default)]
    pub changes: Vec<ResumeChange>,
    /// Quality metrics
    #[serde(default)]
    pub metrics: Metrics,
    /// Any additional fields produced by the generator, kept as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OptimizationResult {
    /// Create a result from a list of changes and metrics
    pub fn new(changes: Vec<ResumeChange>, metrics: Metrics) -> Self {
        Self {
            changes,
            metrics,
            extra: serde_json::Map::new(),
        }
    }

    /// Number of proposed changes
    pub fn total_changes(&self) -> usize {
        self.changes.len()
    }

    /// True if at least one change was accepted or edited
    pub fn has_any_accepted_changes(&self) -> bool {
        self.changes
            .iter()
            .any(|c| matches!(c.status, ChangeStatus::Accepted | ChangeStatus::Edited))
    }
}

impl GenerationResult for OptimizationResult {
    fn change_stats(&self) -> ChangeStats {
        ChangeStats::tally(self.changes.iter().map(|c| c.status))
    }

    fn metrics(&self) -> Metrics {
        self.metrics.clone()
    }
}
