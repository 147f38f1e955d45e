//! Error conversion from internal error types.
//!
//! This module provides conversions from [`VaultError`] to the executor's
//! [`Error`] type.

use crate::Error;
use tailor_core::{VaultError, VaultResult};

/// Convert a VaultError to an executor Error.
///
/// Keeps the identifier and the underlying message; the I/O source chain is
/// flattened into the reason string.
impl From<VaultError> for Error {
    fn from(err: VaultError) -> Self {
        match err {
            VaultError::NotFound { id } => Error::NotFound { id },

            VaultError::Io { context, source } => Error::Io {
                reason: format!("{}: {}", context, source),
            },

            VaultError::CorruptIndex { path, reason } => Error::CorruptIndex {
                reason: format!("{}: {}", path.display(), reason),
            },

            VaultError::CorruptRecord { id, reason } => Error::CorruptRecord { id, reason },

            VaultError::Validation { reason } => Error::InvalidInput { reason },

            VaultError::Config { path, reason } => Error::InvalidInput {
                reason: format!("config {}: {}", path.display(), reason),
            },
        }
    }
}

/// Convert a tailor_core::VaultResult to an executor Result.
pub fn convert_result<T>(result: VaultResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
