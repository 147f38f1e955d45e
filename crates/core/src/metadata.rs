//! Version metadata
//!
//! `VersionMetadata` is the part of a version that lives in the index as well
//! as in the record file. Most of it is write-once; only notes, tags and the
//! submission fields may change, and only through a [`MetadataPatch`].

use crate::id::VersionId;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Current time as a sortable ISO-8601 string
///
/// Always UTC with microsecond precision and a `Z` suffix, so every
/// timestamp has the same width and lexical order equals chronological order.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Descriptive facts about one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMetadata {
    /// Unique identifier
    pub version_id: VersionId,
    /// Sequence number, strictly increasing per store
    pub version_number: u64,
    /// Creation time (see [`timestamp_now`])
    pub timestamp: String,
    /// Target job title
    pub job_title: String,
    /// Target company
    pub company_name: String,
    /// Optimization style ("conservative", "balanced", "aggressive")
    pub optimization_style: String,
    /// Optimization tier ("basic", "standard", "premium")
    pub optimization_tier: String,
    /// Number of proposed changes
    pub total_changes: u32,
    /// Number of accepted changes
    pub accepted_changes: u32,
    /// Number of rejected changes
    pub rejected_changes: u32,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Tags in insertion order; duplicates are kept
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether this version was submitted to the employer
    #[serde(default)]
    pub is_submitted: bool,
    /// When it was submitted
    #[serde(default)]
    pub submitted_date: Option<String>,
    /// Whether a response was received
    #[serde(default)]
    pub response_received: Option<bool>,
}

impl VersionMetadata {
    /// Human-readable name, e.g. `v3 - Acme - Engineer (2026-01-05 14:30)`
    ///
    /// Accepts RFC 3339 stamps and naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` ones
    /// as written by older stores. Falls back to the raw timestamp otherwise.
    pub fn display_name(&self) -> String {
        let when = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f"))
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.timestamp.clone());
        format!(
            "v{} - {} - {} ({})",
            self.version_number, self.company_name, self.job_title, when
        )
    }

    /// Short name, e.g. `v3 - Acme`
    pub fn short_name(&self) -> String {
        format!("v{} - {}", self.version_number, self.company_name)
    }

    /// True if `tag` is one of this version's tags (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Partial update of the mutable metadata fields
///
/// `None` means "leave unchanged". There is no way to clear `notes` or
/// `submitted_date` back to absent; pass an empty string instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPatch {
    /// New notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Replacement tag list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New submitted flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_submitted: Option<bool>,
    /// New submission date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<String>,
    /// New response flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_received: Option<bool>,
}

impl MetadataPatch {
    /// Empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Replace tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the submitted flag
    pub fn submitted(mut self, is_submitted: bool) -> Self {
        self.is_submitted = Some(is_submitted);
        self
    }

    /// Set the submission date
    pub fn submitted_date(mut self, date: impl Into<String>) -> Self {
        self.submitted_date = Some(date.into());
        self
    }

    /// Set the response flag
    pub fn response_received(mut self, received: bool) -> Self {
        self.response_received = Some(received);
        self
    }

    /// True if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.notes.is_none()
            && self.tags.is_none()
            && self.is_submitted.is_none()
            && self.submitted_date.is_none()
            && self.response_received.is_none()
    }

    /// Apply provided fields to `metadata`
    pub fn apply(&self, metadata: &mut VersionMetadata) {
        if let Some(notes) = &self.notes {
            metadata.notes = Some(notes.clone());
        }
        if let Some(tags) = &self.tags {
            metadata.tags = tags.clone();
        }
        if let Some(is_submitted) = self.is_submitted {
            metadata.is_submitted = is_submitted;
        }
        if let Some(date) = &self.submitted_date {
            metadata.submitted_date = Some(date.clone());
        }
        if let Some(received) = self.response_received {
            metadata.response_received = Some(received);
        }
    }
}

/// Listing filter
///
/// Applied in order: company (case-insensitive substring), tag (exact
/// membership), submitted flag. Empty filter strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFilter {
    /// Substring of the company name
    #[serde(default)]
    pub company: Option<String>,
    /// Tag that must be present
    #[serde(default)]
    pub tag: Option<String>,
    /// Only submitted versions
    #[serde(default)]
    pub submitted_only: bool,
}

impl VersionFilter {
    /// Match everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by company substring
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Filter by tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Only submitted versions
    pub fn submitted_only(mut self, submitted_only: bool) -> Self {
        self.submitted_only = submitted_only;
        self
    }

    /// True if `metadata` passes every configured filter
    pub fn matches(&self, metadata: &VersionMetadata) -> bool {
        if let Some(company) = self.company.as_deref().filter(|c| !c.is_empty()) {
            let needle = company.to_lowercase();
            if !metadata.company_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            if !metadata.has_tag(tag) {
                return false;
            }
        }
        if self.submitted_only && !metadata.is_submitted {
            return false;
        }
        true
    }
}
