//! Version identifiers
//!
//! A `VersionId` is a random (v4) UUID. It doubles as the record file stem,
//! so parsing is strict: only canonical UUID text is accepted, which also
//! keeps caller-supplied identifiers from naming arbitrary paths.

use crate::error::{VaultError, VaultResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique identifier of a saved version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(Uuid);

impl VersionId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        VersionId(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        VersionId(uuid)
    }

    /// Parse an identifier from its string form
    ///
    /// Returns a validation error for anything that is not a UUID.
    pub fn parse(s: &str) -> VaultResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VaultError::validation("version id must not be empty"));
        }
        Uuid::parse_str(trimmed)
            .map(VersionId)
            .map_err(|e| VaultError::validation(format!("malformed version id '{}': {}", s, e)))
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// File name of the record for this version (`<id>.json`)
    pub fn record_file_name(&self) -> String {
        format!("{}.json", self.0.hyphenated())
    }
}

impl Default for VersionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for VersionId {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionId::parse(s)
    }
}
