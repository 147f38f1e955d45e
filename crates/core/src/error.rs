//! Error types for tailorvault
//!
//! `VaultError` is the single error type returned by the storage and engine
//! layers. Every variant maps onto one of the caller-facing [`ErrorKind`]s,
//! which is what the executor boundary reports.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used across the workspace
pub type VaultResult<T> = std::result::Result<T, VaultError>;

/// Caller-facing error categories
///
/// These are deliberately coarse: they describe what happened from the
/// caller's point of view, not which internal step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Identifier absent from the index or no record file on disk
    NotFound,
    /// Read or write error against durable storage
    IoFailure,
    /// Index present but unparsable
    CorruptIndex,
    /// A single record file present but unparsable
    CorruptRecord,
    /// Caller supplied malformed or contradictory input
    ValidationFailure,
}

impl ErrorKind {
    /// Stable, lowercase name of this kind (used in log fields and CLI output)
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::IoFailure => "io_failure",
            ErrorKind::CorruptIndex => "corrupt_index",
            ErrorKind::CorruptRecord => "corrupt_record",
            ErrorKind::ValidationFailure => "validation_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the version store and its storage layer
#[derive(Debug, Error)]
pub enum VaultError {
    /// No version with this identifier exists
    #[error("version {id} not found")]
    NotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// Filesystem operation failed
    #[error("I/O failure while {context}: {source}")]
    Io {
        /// What the store was doing when the failure happened
        context: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The metadata index could not be parsed
    #[error("corrupt index at {}: {reason}", path.display())]
    CorruptIndex {
        /// Location of the index file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A record file could not be parsed
    #[error("corrupt record for version {id}: {reason}")]
    CorruptRecord {
        /// Identifier of the affected version
        id: String,
        /// Parser message
        reason: String,
    },

    /// Caller input was rejected
    #[error("invalid input: {reason}")]
    Validation {
        /// Why the input was rejected
        reason: String,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration at {}: {reason}", path.display())]
    Config {
        /// Location of the configuration file
        path: PathBuf,
        /// Why the configuration was rejected
        reason: String,
    },
}

impl VaultError {
    /// Create a NotFound error for an identifier
    pub fn not_found(id: impl fmt::Display) -> Self {
        VaultError::NotFound { id: id.to_string() }
    }

    /// Create an I/O error with context describing the failed step
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        VaultError::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a CorruptIndex error
    pub fn corrupt_index(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        VaultError::CorruptIndex {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a CorruptRecord error
    pub fn corrupt_record(id: impl fmt::Display, reason: impl fmt::Display) -> Self {
        VaultError::CorruptRecord {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        VaultError::Validation {
            reason: reason.into(),
        }
    }

    /// The caller-facing category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VaultError::NotFound { .. } => ErrorKind::NotFound,
            VaultError::Io { .. } => ErrorKind::IoFailure,
            VaultError::CorruptIndex { .. } => ErrorKind::CorruptIndex,
            VaultError::CorruptRecord { .. } => ErrorKind::CorruptRecord,
            VaultError::Validation { .. } | VaultError::Config { .. } => {
                ErrorKind::ValidationFailure
            }
        }
    }

    /// Returns true if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(VaultError::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(
            VaultError::io("reading", io::Error::new(io::ErrorKind::Other, "boom")).kind(),
            ErrorKind::IoFailure
        );
        assert_eq!(
            VaultError::corrupt_index("/tmp/i.json", "eof").kind(),
            ErrorKind::CorruptIndex
        );
        assert_eq!(
            VaultError::corrupt_record("abc", "eof").kind(),
            ErrorKind::CorruptRecord
        );
        assert_eq!(
            VaultError::validation("bad").kind(),
            ErrorKind::ValidationFailure
        );
    }

    #[test]
    fn test_messages_carry_context() {
        let err = VaultError::io("writing record abc", io::Error::new(io::ErrorKind::Other, "disk full"));
        let msg = err.to_string();
        assert!(msg.contains("writing record abc"));
        assert!(msg.contains("disk full"));

        assert_eq!(
            VaultError::not_found("1234").to_string(),
            "version 1234 not found"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ErrorKind::CorruptIndex.as_str(), "corrupt_index");
    }
}
