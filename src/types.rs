//! Public types for the tailorvault API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Identity and metadata
// ============================================================================

pub use tailor_core::{timestamp_now, MetadataPatch, VersionFilter, VersionId, VersionMetadata};

// ============================================================================
// Records and payloads
// ============================================================================

/// A stored version with the shipped payload types
pub type VersionRecord = tailor_core::VersionRecord<OptimizationResult, ResumeContent>;

pub use tailor_core::{
    ChangeStats, ChangeStatus, ChangeType, EducationItem, ExperienceItem, FinalContent,
    GenerationResult, Metrics, MetricsSummary, OptimizationResult, ResumeChange, ResumeContent,
};

// ============================================================================
// Comparison
// ============================================================================

/// A comparison between two stored versions
pub type VersionComparison = tailor_core::VersionComparison<OptimizationResult, ResumeContent>;

pub use tailor_core::{MetricsDelta, TextDiff, TextPair};

// ============================================================================
// Store results and configuration
// ============================================================================

pub use tailor_engine::{DeleteOutcome, ReconcileReport, StorageStats, StoreConfig};

/// `last_updated` text of a vault with no versions
pub use tailor_engine::NEVER as NEVER_UPDATED;

// ============================================================================
// Errors
// ============================================================================

pub use tailor_core::{ErrorKind, VaultError};
