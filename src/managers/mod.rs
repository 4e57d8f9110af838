//! Record managers
//!
//! Thin domain wrappers over `RecordStore`. Each one owns a single store and
//! picks the lookup flavour that suits its callers.

mod database;
mod users;

pub use database::{Database, UserId};
pub use users::UserManager;
