//! User database (id -> display name)

use crate::store::{RecordStore, StoreResult};
use std::collections::HashMap;

/// Numeric user identifier
pub type UserId = u64;

/// Database of users keyed by numeric id
///
/// Lookups are lenient: an unknown id yields `None`.
#[derive(Debug, Clone)]
pub struct Database {
    data: RecordStore<UserId, String>,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Database {
            data: RecordStore::new(),
        }
    }

    /// Add a user, failing with `DuplicateKey` if the id is taken
    pub fn add_user(&mut self, id: UserId, name: impl Into<String>) -> StoreResult<()> {
        self.data.add(id, name.into()).map(|_| ())
    }

    /// Get a user's name, or `None` if the id is unknown
    pub fn get_user(&self, id: UserId) -> Option<&str> {
        self.data.get(&id).map(String::as_str)
    }

    /// Delete a user. Unknown ids are ignored.
    pub fn delete_user(&mut self, id: UserId) {
        self.data.delete(&id);
    }

    /// Snapshot of all users
    pub fn users(&self) -> HashMap<UserId, String> {
        self.data.list_all()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every user
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
