//! Core types for tailorvault
//!
//! This crate defines the data model shared by every other layer:
//! - `VersionId`: opaque 128-bit identifier of a saved version
//! - `VersionMetadata`: the patchable, index-resident facts about a version
//! - `VersionRecord`: the full persisted snapshot (metadata + payloads)
//! - `GenerationResult` / `FinalContent`: interfaces consumed from collaborators
//! - `VersionComparison`: the on-demand, never-persisted comparator
//! - `VaultError`: the error type used across the workspace
//!
//! Nothing in this crate touches the filesystem.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod id;
pub mod metadata;
pub mod optimization;
pub mod record;
pub mod resume;
pub mod traits;

pub use compare::{MetricsDelta, TextDiff, TextPair, VersionComparison};
pub use error::{ErrorKind, VaultError, VaultResult};
pub use id::VersionId;
pub use metadata::{timestamp_now, MetadataPatch, VersionFilter, VersionMetadata};
pub use optimization::{ChangeStatus, ChangeType, OptimizationResult, ResumeChange};
pub use record::{MetricsSummary, VersionRecord};
pub use resume::{EducationItem, ExperienceItem, ResumeContent};
pub use traits::{ChangeStats, FinalContent, GenerationResult, Metrics};
