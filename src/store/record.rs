//! Key-unique record store implementation

use super::error::{StoreError, StoreResult};
use crate::config::{LookupPolicy, StoreConfig};
use siphasher::sip::SipHasher13;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasherDefault, Hash};
use tracing::{debug, warn};

/// Type alias for our hash map with SipHasher
type StoreMap<K, V> = HashMap<K, V, BuildHasherDefault<SipHasher13>>;

/// In-memory record store
///
/// Maps unique keys to values. `add` never overwrites: inserting a key that is
/// already present fails and leaves the stored value untouched. Lookups come in
/// two flavours, lenient (`get`) and strict (`get_strict`), and `lookup`
/// applies whichever one the store was configured with.
#[derive(Debug, Clone)]
pub struct RecordStore<K, V> {
    /// The stored records
    entries: StoreMap<K, V>,

    /// Policy used by `lookup`
    policy: LookupPolicy,
}

impl<K, V> RecordStore<K, V>
where
    K: Eq + Hash + Debug,
{
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self::from_config(&StoreConfig::default())
    }

    /// Create an empty store with the specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(&StoreConfig {
            capacity,
            ..StoreConfig::default()
        })
    }

    /// Create an empty store from a configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        RecordStore {
            entries: HashMap::with_capacity_and_hasher(
                config.capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
            policy: config.lookup,
        }
    }

    /// The policy applied by `lookup`
    pub fn policy(&self) -> LookupPolicy {
        self.policy
    }

    /// Add a new record
    ///
    /// Returns `Ok(true)` once stored. Fails with `DuplicateKey` if the key is
    /// already present, in which case the store is not modified.
    pub fn add(&mut self, key: K, value: V) -> StoreResult<bool> {
        if self.entries.contains_key(&key) {
            warn!(?key, "rejecting duplicate record");
            return Err(StoreError::duplicate(&key));
        }

        debug!(?key, "adding record");
        self.entries.insert(key, value);
        Ok(true)
    }

    /// Lenient lookup: the value for `key`, or `None` if absent
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Strict lookup: the value for `key`, or `MissingKey` if absent
    pub fn get_strict<Q>(&self, key: &Q) -> StoreResult<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.entries.get(key).ok_or_else(|| {
            debug!(?key, "strict lookup missed");
            StoreError::missing(&key)
        })
    }

    /// Lookup following the configured `LookupPolicy`
    ///
    /// Under `Lenient` a missing key is `Ok(None)`; under `Strict` it is an
    /// error. A present key is always `Ok(Some(_))`.
    pub fn lookup<Q>(&self, key: &Q) -> StoreResult<Option<&V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        match self.policy {
            LookupPolicy::Lenient => Ok(self.get(key)),
            LookupPolicy::Strict => self.get_strict(key).map(Some),
        }
    }

    /// Delete a record, returns true if the key existed
    ///
    /// Deleting an absent key is a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(?key, "deleted record");
        }
        removed
    }

    /// Check if a key is stored
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Snapshot of every record
    ///
    /// The returned map is an owned copy; later changes to the store do not
    /// show up in it.
    pub fn list_all(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Iterate over the stored keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Remove all records
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        debug!(dropped, "cleared store");
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for RecordStore<K, V>
where
    K: Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
