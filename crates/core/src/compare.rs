//! Version comparison
//!
//! A `VersionComparison` pairs two loaded records and derives, on demand,
//! the signed metric deltas (always `B - A`) and a side-by-side view of the
//! summary, headline and skills text. Nothing here is persisted and nothing
//! is rounded or clamped.

use crate::record::{MetricsSummary, VersionRecord};
use crate::traits::{FinalContent, GenerationResult};
use serde::{Deserialize, Serialize};

/// Signed per-metric differences, `value(B) - value(A)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDelta {
    /// Overall score delta
    pub overall_score: f64,
    /// Authenticity score delta
    pub authenticity_score: f64,
    /// Role alignment score delta
    pub role_alignment_score: f64,
    /// ATS score delta
    pub ats_score: f64,
    /// Total changes delta
    pub total_changes: i64,
    /// Accepted changes delta
    pub accepted_changes: i64,
    /// Rejected changes delta
    pub rejected_changes: i64,
}

impl MetricsDelta {
    /// Difference between two summaries
    pub fn between(a: &MetricsSummary, b: &MetricsSummary) -> Self {
        MetricsDelta {
            overall_score: b.overall_score - a.overall_score,
            authenticity_score: b.authenticity_score - a.authenticity_score,
            role_alignment_score: b.role_alignment_score - a.role_alignment_score,
            ats_score: b.ats_score - a.ats_score,
            total_changes: b.total_changes - a.total_changes,
            accepted_changes: b.accepted_changes - a.accepted_changes,
            rejected_changes: b.rejected_changes - a.rejected_changes,
        }
    }

    /// True if every delta is exactly zero
    pub fn is_zero(&self) -> bool {
        *self == MetricsDelta::default()
    }
}

/// One field rendered for both sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    /// Text in version A
    pub a: String,
    /// Text in version B
    pub b: String,
}

impl TextPair {
    /// True if both sides are identical
    pub fn is_unchanged(&self) -> bool {
        self.a == self.b
    }
}

/// Side-by-side text for the compared fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    /// Professional summary
    pub summary: TextPair,
    /// Headline
    pub headline: TextPair,
    /// Skills, joined with ", "
    pub skills: TextPair,
}

/// Two loaded versions under comparison
#[derive(Debug, Clone)]
pub struct VersionComparison<R, C> {
    /// Baseline
    pub version_a: VersionRecord<R, C>,
    /// Candidate
    pub version_b: VersionRecord<R, C>,
}

impl<R, C> VersionComparison<R, C>
where
    R: GenerationResult,
    C: FinalContent,
{
    /// Pair two records; A is the baseline
    pub fn new(version_a: VersionRecord<R, C>, version_b: VersionRecord<R, C>) -> Self {
        Self {
            version_a,
            version_b,
        }
    }

    /// Signed metric deltas
    pub fn metrics_delta(&self) -> MetricsDelta {
        MetricsDelta::between(
            &self.version_a.metrics_summary(),
            &self.version_b.metrics_summary(),
        )
    }

    /// Paired summary, headline and skills text
    pub fn text_diff(&self) -> TextDiff {
        let a = &self.version_a.final_content;
        let b = &self.version_b.final_content;
        TextDiff {
            summary: TextPair {
                a: a.summary().unwrap_or_default().to_string(),
                b: b.summary().unwrap_or_default().to_string(),
            },
            headline: TextPair {
                a: a.headline().unwrap_or_default().to_string(),
                b: b.headline().unwrap_or_default().to_string(),
            },
            skills: TextPair {
                a: self.version_a.skills_text(),
                b: self.version_b.skills_text(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tests::sample_metadata;
    use crate::optimization::OptimizationResult;
    use crate::resume::ResumeContent;
    use crate::traits::Metrics;
    use proptest::prelude::*;

    fn record(overall: Option<f64>, accepted: u32, headline: Option<&str>, skills: &[&str]) -> VersionRecord {
        let mut metadata = sample_metadata();
        metadata.accepted_changes = accepted;
        VersionRecord {
            metadata,
            optimization_result: OptimizationResult::new(
                vec![],
                Metrics {
                    overall_score: overall,
                    ..Metrics::default()
                },
            ),
            final_content: ResumeContent {
                headline: headline.map(str::to_string),
                skills: skills.iter().map(|s| s.to_string()).collect(),
                ..ResumeContent::default()
            },
            job_description: String::new(),
            original_text: String::new(),
        }
    }

    #[test]
    fn test_delta_is_b_minus_a() {
        let cmp = VersionComparison::new(
            record(Some(80.0), 7, None, &[]),
            record(Some(72.5), 9, None, &[]),
        );
        let delta = cmp.metrics_delta();
        assert_eq!(delta.overall_score, -7.5);
        assert_eq!(delta.accepted_changes, 2);
        assert_eq!(delta.total_changes, 0);
    }

    #[test]
    fn test_missing_metric_counts_as_zero() {
        let cmp = VersionComparison::new(record(None, 0, None, &[]), record(Some(50.0), 0, None, &[]));
        assert_eq!(cmp.metrics_delta().overall_score, 50.0);
    }

    #[test]
    fn test_same_record_gives_zero_delta() {
        let r = record(Some(61.0), 4, Some("Engineer"), &["Rust"]);
        let cmp = VersionComparison::new(r.clone(), r);
        assert!(cmp.metrics_delta().is_zero());
        let text = cmp.text_diff();
        assert!(text.headline.is_unchanged());
        assert!(text.skills.is_unchanged());
    }

    #[test]
    fn test_text_diff_pairs_fields() {
        let cmp = VersionComparison::new(
            record(None, 0, None, &["Go", "SQL"]),
            record(None, 0, Some("Staff Engineer"), &["Rust", "SQL", "Rust"]),
        );
        let text = cmp.text_diff();
        assert_eq!(text.headline.a, "");
        assert_eq!(text.headline.b, "Staff Engineer");
        assert_eq!(text.skills.a, "Go, SQL");
        assert_eq!(text.skills.b, "Rust, SQL, Rust");
        assert_eq!(text.summary, TextPair::default());
    }

    proptest! {
        #[test]
        fn prop_delta_sign_and_value(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6, ca in 0u32..1000, cb in 0u32..1000) {
            let cmp = VersionComparison::new(record(Some(a), ca, None, &[]), record(Some(b), cb, None, &[]));
            let delta = cmp.metrics_delta();
            prop_assert_eq!(delta.overall_score, b - a);
            prop_assert_eq!(delta.accepted_changes, i64::from(cb) - i64::from(ca));
        }
    }
}
