//! Error types for task normalization.

use thiserror::Error;

/// Errors returned while normalizing upstream task records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The structured `due` field is present but is not an ISO-8601 value.
    #[error("invalid due timestamp '{0}', expected an ISO-8601 date or date-time")]
    InvalidDueTimestamp(String),
}
