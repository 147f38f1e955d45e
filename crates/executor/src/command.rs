//! Commands accepted by the executor.
//!
//! Identifiers arrive as strings and are validated by the handlers, so a
//! malformed id is reported as invalid input rather than a panic.

use serde::{Deserialize, Serialize};
use tailor_core::{MetadataPatch, OptimizationResult, ResumeContent};

/// Inputs for [`Command::Save`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Generation result
    pub optimization_result: OptimizationResult,
    /// Final résumé
    pub final_resume: ResumeContent,
    /// Target job title
    pub job_title: String,
    /// Target company
    pub company_name: String,
    /// Job description text
    #[serde(default)]
    pub job_description: String,
    /// Original résumé text
    #[serde(default)]
    pub original_resume_text: String,
    /// Optimization style; store default when absent
    #[serde(default)]
    pub optimization_style: Option<String>,
    /// Optimization tier; store default when absent
    #[serde(default)]
    pub optimization_tier: Option<String>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl SaveRequest {
    /// Request with the required fields
    pub fn new(
        optimization_result: OptimizationResult,
        final_resume: ResumeContent,
        job_title: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            optimization_result,
            final_resume,
            job_title: job_title.into(),
            company_name: company_name.into(),
            job_description: String::new(),
            original_resume_text: String::new(),
            optimization_style: None,
            optimization_tier: None,
            notes: None,
            tags: None,
        }
    }
}

/// A single operation against the vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Save a new version
    Save(Box<SaveRequest>),
    /// Load one full record
    Load {
        /// Version id
        id: String,
    },
    /// List indexed metadata
    List {
        /// Case-insensitive company substring
        #[serde(default)]
        company: Option<String>,
        /// Exact tag
        #[serde(default)]
        tag: Option<String>,
        /// Only submitted versions
        #[serde(default)]
        submitted_only: bool,
    },
    /// Delete a version
    Delete {
        /// Version id
        id: String,
    },
    /// Patch mutable metadata
    UpdateMetadata {
        /// Version id
        id: String,
        /// Fields to change
        patch: MetadataPatch,
    },
    /// Compare two versions (B relative to A)
    Compare {
        /// Baseline id
        a: String,
        /// Candidate id
        b: String,
    },
    /// Storage statistics
    Stats,
    /// Rebuild index entries from record files
    Reconcile,
    /// Distinct tags in use
    Tags,
}

impl Command {
    /// Short operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Save(_) => "save",
            Command::Load { .. } => "load",
            Command::List { .. } => "list",
            Command::Delete { .. } => "delete",
            Command::UpdateMetadata { .. } => "update_metadata",
            Command::Compare { .. } => "compare",
            Command::Stats => "storage_stats",
            Command::Reconcile => "reconcile",
            Command::Tags => "all_tags",
        }
    }

    /// The identifier(s) this command targets, for log context
    pub fn target(&self) -> Option<String> {
        match self {
            Command::Load { id } | Command::Delete { id } | Command::UpdateMetadata { id, .. } => {
                Some(id.clone())
            }
            Command::Compare { a, b } => Some(format!("{}..{}", a, b)),
            _ => None,
        }
    }
}
