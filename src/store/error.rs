//! Error types for the record store

use std::fmt::Debug;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store
///
/// The payload is the rendered key that caused the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `add` was called with a key that is already stored
    #[error("record already exists: {0}")]
    DuplicateKey(String),

    /// A strict lookup was made for a key that is not stored
    #[error("record does not exist: {0}")]
    MissingKey(String),
}

impl StoreError {
    pub(crate) fn duplicate(key: &impl Debug) -> Self {
        StoreError::DuplicateKey(format!("{:?}", key))
    }

    pub(crate) fn missing(key: &impl Debug) -> Self {
        StoreError::MissingKey(format!("{:?}", key))
    }

    /// Check if this is a duplicate key error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateKey(_))
    }

    /// Check if this is a missing key error
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::MissingKey(_))
    }
}
