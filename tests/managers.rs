//! End-to-end scenarios, one freshly built store per test

use recordstore::{Database, LookupPolicy, RecordStore, StoreConfig, StoreError, UserManager};
use std::collections::HashMap;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_user_manager_lists_every_user() -> anyhow::Result<()> {
    init_tracing();
    let mut manager = UserManager::new();

    manager.add_user("Ilai", "x@example.com")?;
    manager.add_user("Dan", "y@example.com")?;

    let expected: HashMap<String, String> = [
        ("Ilai".to_string(), "x@example.com".to_string()),
        ("Dan".to_string(), "y@example.com".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(manager.get_all_users(), expected);
    Ok(())
}

#[test]
fn test_user_manager_rejects_existing_user() -> anyhow::Result<()> {
    init_tracing();
    let mut manager = UserManager::new();
    manager.add_user("Ilai", "x@example.com")?;

    let err = manager.add_user("Ilai", "x@example.com").unwrap_err();
    assert_eq!(err, StoreError::DuplicateKey("\"Ilai\"".to_string()));
    assert_eq!(manager.get_user_email("Ilai")?, "x@example.com");
    Ok(())
}

#[test]
fn test_user_manager_unknown_user() {
    init_tracing();
    let manager = UserManager::new();

    let err = manager.get_user_email("nobody").unwrap_err();
    assert_eq!(err.to_string(), "record does not exist: \"nobody\"");
}

#[test]
fn test_database_duplicate_keeps_first_value() -> anyhow::Result<()> {
    init_tracing();
    let mut db = Database::new();

    db.add_user(1, "Alice")?;
    assert_eq!(db.get_user(1), Some("Alice"));

    let err = db.add_user(1, "Bob").unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(db.get_user(1), Some("Alice"));
    Ok(())
}

#[test]
fn test_database_delete_then_get() {
    init_tracing();
    let mut db = Database::new();

    // absent ids are fine too
    db.delete_user(42);
    assert_eq!(db.get_user(42), None);

    db.add_user(2, "Bob").unwrap();
    db.delete_user(2);
    assert_eq!(db.get_user(2), None);
}

#[test]
fn test_store_built_from_json_config() -> anyhow::Result<()> {
    init_tracing();
    let config = StoreConfig::from_json(r#"{"capacity": 8, "lookup": "strict"}"#)?;
    let mut store: RecordStore<String, u32> = RecordStore::from_config(&config);
    assert_eq!(store.policy(), LookupPolicy::Strict);

    store.add("a".to_string(), 1)?;
    store.add("b".to_string(), 2)?;
    assert_eq!(store.lookup("a")?, Some(&1));
    assert!(store.lookup("c").is_err());

    let expected: HashMap<String, u32> =
        [("b".to_string(), 2), ("a".to_string(), 1)].into_iter().collect();
    assert_eq!(store.list_all(), expected);
    Ok(())
}
