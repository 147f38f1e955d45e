//! Command handlers.
//!
//! - `version`: save, load, list, delete, update_metadata, compare
//! - `vault`: storage_stats, reconcile, all_tags

pub(crate) mod vault;
pub(crate) mod version;

use crate::{Error, Result};
use tailor_core::VersionId;

/// Parse a caller-supplied identifier
pub(crate) fn parse_id(id: &str) -> Result<VersionId> {
    VersionId::parse(id).map_err(Error::from)
}

/// Treat blank filter strings as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
