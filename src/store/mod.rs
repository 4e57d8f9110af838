//! In-memory record storage module
//!
//! Provides the generic key-unique record store and its error types.
//! This module knows nothing about users or emails; the managers build on it.

mod error;
mod record;

pub use error::{StoreError, StoreResult};
pub use record::RecordStore;
