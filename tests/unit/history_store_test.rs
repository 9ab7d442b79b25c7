//! Unit tests for the HistoryStore public API.
//!
//! These tests exercise adding, listing, removing, and clearing scan history
//! records through the store's async interface, using an in-memory backend.
//! Backends are cloneable handles, so a test can keep one to inspect what
//! the store actually persisted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use qio::managers::history_store::HistoryStore;
use qio::storage::{MemoryBackend, StorageBackend};
use qio::types::errors::{HistoryError, StorageError};
use qio::types::history::{RecordCandidate, RecordKind};

/// Helper: create a HistoryStore backed by a fresh in-memory backend.
fn setup() -> HistoryStore<MemoryBackend> {
    HistoryStore::new(MemoryBackend::new())
}

/// A backend whose writes can be switched to fail, for testing the
/// no-optimistic-state guarantee.
#[derive(Clone)]
struct FlakyBackend {
    inner: MemoryBackend,
    fail_writes: Arc<AtomicBool>,
}

impl FlakyBackend {
    fn new() -> Self {
        Self {
            inner: MemoryBackend::new(),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl StorageBackend for FlakyBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::IoError("simulated write failure".into()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

/// add() followed by list() yields a sequence whose first element equals
/// the record returned by add().
#[tokio::test]
async fn test_added_record_is_first_in_list() {
    let store = setup();

    let record = store
        .add(RecordCandidate::new("hello"))
        .await
        .expect("add should succeed");

    let records = store.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], record);
}

/// The concrete scenario from the store contract: a link candidate gets its
/// title from the payload and the generic subtitle.
#[tokio::test]
async fn test_add_fills_defaults_for_link_candidate() {
    let store = setup();

    let record = store
        .add(RecordCandidate {
            kind: Some(RecordKind::Link),
            ..RecordCandidate::new("https://example.com")
        })
        .await
        .unwrap();

    assert_eq!(record.kind, RecordKind::Link);
    assert_eq!(record.title, "https://example.com");
    assert_eq!(record.subtitle, "Scanned Code");
    assert_eq!(record.payload, "https://example.com");
    assert!(!record.id.is_empty());
    assert!(record.created_at > 0);

    let records = store.list().await;
    assert_eq!(records, vec![record]);
}

/// Explicit candidate fields are kept as supplied.
#[tokio::test]
async fn test_add_keeps_supplied_fields() {
    let store = setup();

    let record = store
        .add(RecordCandidate {
            id: Some("custom-id".into()),
            kind: Some(RecordKind::Wifi),
            title: Some("Home network".into()),
            subtitle: Some("WPA2".into()),
            created_at: Some(1_700_000_000_000),
            payload: "WIFI:S:HomeNet;T:WPA;P:secret;;".into(),
        })
        .await
        .unwrap();

    assert_eq!(record.id, "custom-id");
    assert_eq!(record.kind, RecordKind::Wifi);
    assert_eq!(record.title, "Home network");
    assert_eq!(record.subtitle, "WPA2");
    assert_eq!(record.created_at, 1_700_000_000_000);
}

/// A caller-supplied id colliding with a persisted record is rejected,
/// never silently overwritten.
#[tokio::test]
async fn test_duplicate_supplied_id_is_rejected() {
    let store = setup();

    store
        .add(RecordCandidate {
            id: Some("dup".into()),
            ..RecordCandidate::new("first")
        })
        .await
        .unwrap();

    let result = store
        .add(RecordCandidate {
            id: Some("dup".into()),
            ..RecordCandidate::new("second")
        })
        .await;

    assert!(matches!(result, Err(HistoryError::DuplicateId(_))));

    // The original record is untouched
    let records = store.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].payload, "first");
}

/// Newest record first: after add(A) then add(B), list() returns [B, A].
#[tokio::test]
async fn test_order_is_newest_first() {
    let store = setup();

    let a = store.add(RecordCandidate::new("A")).await.unwrap();
    let b = store.add(RecordCandidate::new("B")).await.unwrap();

    let records = store.list().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, b.id);
    assert_eq!(records[1].id, a.id);
}

/// Synthesized ids are unique and strictly increasing, even when several
/// records are created within the same millisecond.
#[tokio::test]
async fn test_synthesized_ids_are_unique_and_monotonic() {
    let store = setup();

    let mut ids = Vec::new();
    for i in 0..20 {
        let record = store
            .add(RecordCandidate::new(format!("payload {}", i)))
            .await
            .unwrap();
        ids.push(record.id.parse::<i64>().expect("ids are numeric instants"));
    }

    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "ids must increase: {:?}", pair);
    }
}

/// An id stays retired after its record is removed: a record added right
/// after the removal gets a strictly newer id.
#[tokio::test]
async fn test_removed_id_is_not_reused() {
    let store = setup();

    let newest = store.add(RecordCandidate::new("newest")).await.unwrap();
    store.remove_by_id(&newest.id).await.unwrap();

    let next = store.add(RecordCandidate::new("next")).await.unwrap();
    assert_ne!(next.id, newest.id);
    assert!(
        next.id.parse::<i64>().unwrap() > newest.id.parse::<i64>().unwrap(),
        "new id must be issued past the removed one"
    );
}

/// list() on an empty store returns an empty sequence, not an error.
#[tokio::test]
async fn test_list_on_fresh_store_is_empty() {
    let store = setup();
    assert!(store.list().await.is_empty());
}

/// list() returns a snapshot: mutating the returned Vec does not affect
/// the store.
#[tokio::test]
async fn test_list_returns_independent_snapshot() {
    let store = setup();
    store.add(RecordCandidate::new("keep me")).await.unwrap();

    let mut snapshot = store.list().await;
    snapshot.clear();

    assert_eq!(store.list().await.len(), 1);
}

/// The second concrete scenario from the store contract: removing "2" from
/// [3, 2, 1] leaves [3, 1].
#[tokio::test]
async fn test_remove_by_id_removes_single_record() {
    let store = setup();

    // Seed ids "1", "2", "3"; newest ("3") ends up first
    for id in ["1", "2", "3"] {
        store
            .add(RecordCandidate {
                id: Some(id.to_string()),
                ..RecordCandidate::new(id)
            })
            .await
            .unwrap();
    }

    let removed = store.remove_by_id("2").await.unwrap();
    assert!(removed);

    let ids: Vec<String> = store.list().await.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["3".to_string(), "1".to_string()]);
}

/// Removing a never-persisted id is a successful no-op returning false,
/// and the sequence is unchanged.
#[tokio::test]
async fn test_remove_missing_id_is_noop() {
    let store = setup();
    store.add(RecordCandidate::new("only")).await.unwrap();

    let removed = store.remove_by_id("no-such-id").await.unwrap();
    assert!(!removed);
    assert_eq!(store.list().await.len(), 1);
}

/// clear() empties the store and is idempotent.
#[tokio::test]
async fn test_clear_twice_succeeds_and_list_is_empty() {
    let store = setup();
    store.add(RecordCandidate::new("a")).await.unwrap();
    store.add(RecordCandidate::new("b")).await.unwrap();

    store.clear().await.unwrap();
    assert!(store.list().await.is_empty());

    store.clear().await.unwrap();
    assert!(store.list().await.is_empty());
}

/// When the persistence write fails, add() reports the failure and the
/// record is not visible to subsequent reads.
#[tokio::test]
async fn test_failed_write_leaves_no_partial_state() {
    let backend = FlakyBackend::new();
    let store = HistoryStore::new(backend.clone());

    store.add(RecordCandidate::new("stored")).await.unwrap();

    backend.set_fail_writes(true);
    let result = store.add(RecordCandidate::new("lost")).await;
    assert!(matches!(result, Err(HistoryError::BackendError(_))));

    backend.set_fail_writes(false);
    let records = store.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].payload, "stored");
}

/// A malformed persisted blob is read as empty, and the raw blob is
/// preserved under the quarantine key.
#[tokio::test]
async fn test_malformed_blob_is_quarantined_and_read_as_empty() {
    let backend = MemoryBackend::new();
    backend
        .set("qio.history", "{ not a record list }")
        .await
        .unwrap();
    let store = HistoryStore::new(backend.clone());

    assert!(store.list().await.is_empty());

    // The raw blob survives under the backup key, the main key is reset
    let quarantined = backend.get(store.quarantine_key()).await.unwrap();
    assert_eq!(quarantined.as_deref(), Some("{ not a record list }"));
    assert!(backend.get(store.key()).await.unwrap().is_none());

    // The store keeps working after recovery
    store.add(RecordCandidate::new("fresh start")).await.unwrap();
    assert_eq!(store.list().await.len(), 1);
}

/// Records parse even when stored data predates optional fields: kind,
/// title and subtitle default instead of failing.
#[tokio::test]
async fn test_old_schema_records_default_missing_fields() {
    let backend = MemoryBackend::new();
    backend
        .set(
            "qio.history",
            r#"[{"id":"1","createdAt":1700000000000,"payload":"bare"}]"#,
        )
        .await
        .unwrap();
    let store = HistoryStore::new(backend);

    let records = store.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, RecordKind::Qr);
    assert_eq!(records[0].title, "");
    assert_eq!(records[0].subtitle, "Scanned Code");
}

/// Unknown kind strings in stored data degrade to the generic kind.
#[tokio::test]
async fn test_unknown_kind_degrades_to_qr() {
    let backend = MemoryBackend::new();
    backend
        .set(
            "qio.history",
            r#"[{"id":"1","kind":"hologram","title":"t","subtitle":"s","createdAt":1,"payload":"p"}]"#,
        )
        .await
        .unwrap();
    let store = HistoryStore::new(backend);

    let records = store.list().await;
    assert_eq!(records[0].kind, RecordKind::Qr);
}
