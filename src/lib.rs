//! recordstore - A small in-memory record store with unique keys
//!
//! The crate is split the same way throughout:
//! - `store` holds the generic key-unique store and its errors
//! - `config` holds construction-time settings
//! - `managers` holds the domain wrappers built on the store

pub mod config;
pub mod managers;
pub mod store;

/// Re-export commonly used types
pub use config::{LookupPolicy, StoreConfig};
pub use managers::{Database, UserId, UserManager};
pub use store::{RecordStore, StoreError, StoreResult};
