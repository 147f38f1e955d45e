//! Interfaces consumed from collaborators
//!
//! The store does not know how a generation result or a final résumé is
//! produced. It only needs:
//! - from the generation result: change statistics and named metric scores
//! - from the final content: the summary, headline and skills fields the
//!   comparator pairs up
//!
//! Both are persisted verbatim through serde.

use crate::optimization::ChangeStatus;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Change counts reported by a generation result
///
/// There are two ways to build one, and they are kept separate on purpose:
/// [`ChangeStats::tally`] counts every status independently (so `accepted +
/// rejected` may be less than `total` while changes are pending), whereas
/// [`ChangeStats::derived`] treats everything not accepted as rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStats {
    /// Number of proposed changes
    pub total: u32,
    /// Changes accepted (including edited ones)
    pub accepted: u32,
    /// Changes rejected
    pub rejected: u32,
    /// Changes still awaiting review
    pub pending: u32,
}

impl ChangeStats {
    /// Count statuses one by one
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ChangeStatus>,
    {
        let mut stats = ChangeStats::default();
        for status in statuses {
            stats.total += 1;
            match status {
                ChangeStatus::Accepted | ChangeStatus::Edited => stats.accepted += 1,
                ChangeStatus::Rejected => stats.rejected += 1,
                ChangeStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }

    /// Build stats from a total and an accepted count, deriving
    /// `rejected = total - accepted` (saturating at zero)
    pub fn derived(total: u32, accepted: u32) -> Self {
        ChangeStats {
            total,
            accepted,
            rejected: total.saturating_sub(accepted),
            pending: 0,
        }
    }

    /// Build stats from three independently tracked counts
    ///
    /// No consistency check is made between the three.
    pub fn explicit(total: u32, accepted: u32, rejected: u32) -> Self {
        ChangeStats {
            total,
            accepted,
            rejected,
            pending: 0,
        }
    }
}

/// Named quality scores attached to a generation result
///
/// Each score is optional: a collaborator may not compute all of them.
/// Consumers that need a number (the comparator) read a missing score as 0.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Aggregate score across all checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    /// Whether the aggregate passed its threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_passed: Option<bool>,
    /// Authenticity (no fabricated claims) score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticity_score: Option<f64>,
    /// Alignment with the target role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_alignment_score: Option<f64>,
    /// Applicant-tracking-system keyword score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ats_score: Option<f64>,
    /// Length compliance score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_score: Option<f64>,
}

/// The output of the generation step, as seen by the store
pub trait GenerationResult: Serialize + DeserializeOwned {
    /// Total/accepted/rejected change counts
    fn change_stats(&self) -> ChangeStats;

    /// Named numeric scores
    fn metrics(&self) -> Metrics;
}

/// The versioned document, as seen by the store and comparator
pub trait FinalContent: Serialize + DeserializeOwned {
    /// Professional summary paragraph, if any
    fn summary(&self) -> Option<&str>;

    /// One-line headline, if any
    fn headline(&self) -> Option<&str>;

    /// Skills in display order
    fn skills(&self) -> &[String];
}
