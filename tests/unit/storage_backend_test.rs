//! Unit tests for the key-value storage backends.
//!
//! Both implementations are exercised through the `StorageBackend` trait:
//! round-trips, absent keys, overwrites, idempotent removal, and (for the
//! SQLite backend) durability across reopen.

use qio::storage::{MemoryBackend, SqliteBackend, StorageBackend};

async fn exercise_backend<B: StorageBackend>(backend: &B) {
    // Absent key is None, not an error
    assert!(backend.get("missing").await.unwrap().is_none());

    // set / get round-trip
    backend.set("k", "v1").await.unwrap();
    assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("v1"));

    // Overwrite replaces the value
    backend.set("k", "v2").await.unwrap();
    assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("v2"));

    // Keys are independent
    backend.set("other", "x").await.unwrap();
    assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("v2"));

    // remove is idempotent
    backend.remove("k").await.unwrap();
    assert!(backend.get("k").await.unwrap().is_none());
    backend.remove("k").await.unwrap();
}

#[tokio::test]
async fn test_memory_backend_contract() {
    let backend = MemoryBackend::new();
    exercise_backend(&backend).await;
}

#[tokio::test]
async fn test_sqlite_backend_contract() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    exercise_backend(&backend).await;
}

#[tokio::test]
async fn test_memory_backend_clones_share_state() {
    let backend = MemoryBackend::new();
    let other = backend.clone();

    backend.set("shared", "value").await.unwrap();
    assert_eq!(other.get("shared").await.unwrap().as_deref(), Some("value"));
}

#[tokio::test]
async fn test_sqlite_backend_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("qio.db");

    {
        let backend = SqliteBackend::open(&db_path).unwrap();
        backend.set("qio.history", "[\"durable\"]").await.unwrap();
    }

    let backend = SqliteBackend::open(&db_path).unwrap();
    assert_eq!(
        backend.get("qio.history").await.unwrap().as_deref(),
        Some("[\"durable\"]")
    );
}

#[tokio::test]
async fn test_sqlite_backend_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("data").join("qio.db");

    let backend = SqliteBackend::open(&db_path).unwrap();
    backend.set("k", "v").await.unwrap();
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_sqlite_backend_stores_large_values() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    let big = "x".repeat(256 * 1024);

    backend.set("big", &big).await.unwrap();
    assert_eq!(backend.get("big").await.unwrap().unwrap().len(), big.len());
}
