//! Executor error type.

use tailor_core::ErrorKind;
use thiserror::Error;

/// Errors reported by [`Executor::execute`](crate::Executor::execute)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No such version
    #[error("version not found: {id}")]
    NotFound {
        /// Requested identifier
        id: String,
    },

    /// Storage read or write failed
    #[error("I/O error: {reason}")]
    Io {
        /// Description including the failed step
        reason: String,
    },

    /// The index could not be parsed
    #[error("corrupt index: {reason}")]
    CorruptIndex {
        /// Parser message
        reason: String,
    },

    /// A record could not be parsed
    #[error("corrupt record {id}: {reason}")]
    CorruptRecord {
        /// Affected version
        id: String,
        /// Parser message
        reason: String,
    },

    /// Caller input rejected
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why
        reason: String,
    },

    /// Executor invariant broken
    ///
    /// Reported to callers as [`ErrorKind::IoFailure`]; the caller-facing
    /// kinds have no separate internal category.
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },

    /// A failure rebuilt from an [`Outcome`](crate::Outcome)
    ///
    /// Carries the outcome's kind and message unchanged.
    #[error("{message}")]
    Reported {
        /// Kind recorded in the outcome
        kind: ErrorKind,
        /// Message recorded in the outcome
        message: String,
    },
}

impl Error {
    /// Caller-facing category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Io { .. } | Error::Internal { .. } => ErrorKind::IoFailure,
            Error::CorruptIndex { .. } => ErrorKind::CorruptIndex,
            Error::CorruptRecord { .. } => ErrorKind::CorruptRecord,
            Error::InvalidInput { .. } => ErrorKind::ValidationFailure,
            Error::Reported { kind, .. } => *kind,
        }
    }
}
