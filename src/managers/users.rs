//! User manager (username -> email)

use crate::store::{RecordStore, StoreResult};
use std::collections::HashMap;

/// Registry of users keyed by username
///
/// Lookups are strict: an unknown username is a `MissingKey` error.
#[derive(Debug, Clone)]
pub struct UserManager {
    users: RecordStore<String, String>,
}

impl UserManager {
    pub fn new() -> Self {
        UserManager {
            users: RecordStore::new(),
        }
    }

    /// Register a user
    ///
    /// Returns `Ok(true)` on success, `DuplicateKey` if the username is taken.
    pub fn add_user(
        &mut self,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> StoreResult<bool> {
        self.users.add(username.into(), email.into())
    }

    /// Email address of `username`, or `MissingKey` if unknown
    pub fn get_user_email(&self, username: &str) -> StoreResult<&str> {
        self.users.get_strict(username).map(String::as_str)
    }

    /// Remove a user, returns true if it existed
    pub fn remove_user(&mut self, username: &str) -> bool {
        self.users.delete(username)
    }

    /// Snapshot of every username and email
    pub fn get_all_users(&self) -> HashMap<String, String> {
        self.users.list_all()
    }
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new()
    }
}
