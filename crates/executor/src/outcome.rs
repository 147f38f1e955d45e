//! Never-failing result envelope for the caller boundary.

use crate::Error;
use serde::{Deserialize, Serialize};
use tailor_core::ErrorKind;

/// Success flag, optional value and a human-readable message
///
/// Failures carry `value: None`, the error message, and the error kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Result value on success
    pub value: Option<T>,
    /// Success summary or error description
    pub message: String,
    /// Error category on failure
    #[serde(default, skip_serializing_if = "Option::is_none", with = "kind_name")]
    pub error_kind: Option<ErrorKind>,
}

impl<T> Outcome<T> {
    /// Successful outcome
    pub fn ok(value: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            value: Some(value),
            message: message.into(),
            error_kind: None,
        }
    }

    /// Failed outcome from an executor error
    pub fn failed(error: &Error) -> Self {
        Self {
            success: false,
            value: None,
            message: error.to_string(),
            error_kind: Some(error.kind()),
        }
    }

    /// Transform the value, keeping flag and message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            success: self.success,
            value: self.value.map(f),
            message: self.message,
            error_kind: self.error_kind,
        }
    }

    /// Back to a `Result`
    ///
    /// A failure becomes [`Error::Reported`] with the same kind and message,
    /// so it displays exactly as the outcome did. A failure without a kind
    /// becomes [`Error::Internal`].
    pub fn into_result(self) -> crate::Result<T> {
        match (self.success, self.value, self.error_kind) {
            (true, Some(value), _) => Ok(value),
            (_, _, Some(kind)) => Err(Error::Reported {
                kind,
                message: self.message,
            }),
            (_, _, None) => Err(Error::Internal {
                reason: self.message,
            }),
        }
    }
}

impl<T> From<crate::Result<T>> for Outcome<T>
where
    T: OutcomeMessage,
{
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => {
                let message = value.outcome_message();
                Outcome::ok(value, message)
            }
            Err(e) => Outcome::failed(&e),
        }
    }
}

/// Values that describe themselves in a success message
pub trait OutcomeMessage {
    /// Message for a successful outcome carrying this value
    fn outcome_message(&self) -> String;
}

impl OutcomeMessage for crate::Output {
    fn outcome_message(&self) -> String {
        self.message()
    }
}

mod kind_name {
    use serde::{Deserialize, Deserializer, Serializer};
    use tailor_core::ErrorKind;

    pub fn serialize<S: Serializer>(kind: &Option<ErrorKind>, s: S) -> Result<S::Ok, S::Error> {
        match kind {
            Some(kind) => s.serialize_some(kind.as_str()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ErrorKind>, D::Error> {
        let name: Option<String> = Option::deserialize(d)?;
        Ok(name.as_deref().and_then(|n| match n {
            "not_found" => Some(ErrorKind::NotFound),
            "io_failure" => Some(ErrorKind::IoFailure),
            "corrupt_index" => Some(ErrorKind::CorruptIndex),
            "corrupt_record" => Some(ErrorKind::CorruptRecord),
            "validation_failure" => Some(ErrorKind::ValidationFailure),
            _ => None,
        }))
    }
}
