//! Domain error model.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type used across the domain layer.
pub type ModelResult<T> = Result<T, ModelError>;

/// Domain-level error.
///
/// Restoration failures are deterministic (a malformed timestamp always
/// fails); storage failures are whatever the [`crate::Storage`] backend
/// reported, propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A reserved timestamp field could not be parsed during restoration.
    #[error("cannot parse `{field}` from {value}: expected `YYYY-MM-DDTHH:MM:SS.ffffff`")]
    TimestampParse { field: String, value: String },

    /// The Storage collaborator failed while registering or saving.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl ModelError {
    pub fn timestamp_parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::TimestampParse {
            field: field.into(),
            value: value.into(),
        }
    }
}
