//! Store configuration
//!
//! Construction-time settings for a `RecordStore`. Every field has a default,
//! so an empty JSON object is a valid configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default initial capacity of the entry map
pub const DEFAULT_CAPACITY: usize = 1024;

/// How a policy-driven lookup treats a missing key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// Missing keys yield `None`
    #[default]
    Lenient,

    /// Missing keys fail with `StoreError::MissingKey`
    Strict,
}

/// Configuration for a record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Initial capacity of the entry map
    pub capacity: usize,

    /// Policy applied by `RecordStore::lookup`
    pub lookup: LookupPolicy,
}

impl StoreConfig {
    /// Configuration with the given lookup policy and default capacity
    pub fn with_policy(lookup: LookupPolicy) -> Self {
        StoreConfig {
            lookup,
            ..Self::default()
        }
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid store configuration")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            capacity: DEFAULT_CAPACITY,
            lookup: LookupPolicy::default(),
        }
    }
}
