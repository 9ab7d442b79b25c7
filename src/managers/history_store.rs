//! History Store for Qio.
//!
//! Owns the durable, ordered list of scan/generation records. The whole
//! collection is one JSON blob under a single key in the persistence
//! backend; every operation is a read-modify-write over that blob,
//! serialized through an internal mutex so cycles cannot interleave and
//! lose updates.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::Mutex;

use crate::storage::StorageBackend;
use crate::types::errors::HistoryError;
use crate::types::history::{HistoryRecord, RecordCandidate, DEFAULT_SUBTITLE};

/// Key holding the serialized history collection.
pub const HISTORY_KEY: &str = "qio.history";

/// Suffix of the key a malformed blob is preserved under before the store
/// resets to empty.
const QUARANTINE_SUFFIX: &str = ".corrupt";

/// Id issuance state, guarded by the same lock that serializes operations.
///
/// Ids derive from the creation instant in epoch milliseconds. Tracking the
/// last issued value keeps new ids strictly increasing even when several
/// records are added within one millisecond, or when the newest record was
/// just removed and the clock has not advanced past it.
struct IdCursor {
    last_issued: i64,
}

impl IdCursor {
    fn next_id(&mut self, now: i64, records: &[HistoryRecord]) -> String {
        let mut instant = now.max(self.last_issued + 1);
        let max_persisted = records
            .iter()
            .filter_map(|r| r.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        if instant <= max_persisted {
            instant = max_persisted + 1;
        }
        // Caller-supplied ids are free-form and can still shadow the
        // formatted instant.
        while records.iter().any(|r| r.id == instant.to_string()) {
            instant += 1;
        }
        self.last_issued = instant;
        instant.to_string()
    }
}

/// The scan history store.
///
/// Callers never hold a mutable view of the collection: reads return
/// snapshot copies, and every mutation persists the full updated sequence
/// before returning.
pub struct HistoryStore<B: StorageBackend> {
    backend: B,
    key: String,
    quarantine_key: String,
    cursor: Mutex<IdCursor>,
}

impl<B: StorageBackend> HistoryStore<B> {
    /// Creates a store over the default history key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, HISTORY_KEY)
    }

    /// Creates a store over a custom key.
    pub fn with_key(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
            quarantine_key: format!("{}{}", key, QUARANTINE_SUFFIX),
            cursor: Mutex::new(IdCursor { last_issued: 0 }),
        }
    }

    /// The key the collection is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The key a malformed blob is preserved under.
    pub fn quarantine_key(&self) -> &str {
        &self.quarantine_key
    }

    /// Returns the current epoch time in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Creates a record from a candidate and persists it at the front of
    /// the sequence. Returns the record as stored.
    ///
    /// Missing fields take their documented defaults: `id` and `created_at`
    /// from the creation instant, `title` from the payload, `subtitle` from
    /// the generic placeholder. If the persistence write fails the record is
    /// not stored and the error is returned.
    pub async fn add(&self, candidate: RecordCandidate) -> Result<HistoryRecord, HistoryError> {
        let mut cursor = self.cursor.lock().await;
        let mut records = self.load(&mut cursor).await?;

        let created_at = candidate.created_at.unwrap_or_else(Self::now_millis);
        let id = match candidate.id {
            Some(id) => {
                if records.iter().any(|r| r.id == id) {
                    return Err(HistoryError::DuplicateId(id));
                }
                id
            }
            None => cursor.next_id(created_at, &records),
        };

        let record = HistoryRecord {
            id,
            kind: candidate.kind.unwrap_or_default(),
            title: candidate
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| candidate.payload.clone()),
            subtitle: candidate
                .subtitle
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
            created_at,
            payload: candidate.payload,
        };

        records.insert(0, record.clone());
        self.persist(&records).await?;
        Ok(record)
    }

    /// Returns a snapshot of the full sequence, newest first.
    ///
    /// Never fails: an absent key is an empty history, a malformed blob is
    /// quarantined and read as empty, and a backend read error is logged
    /// and read as empty.
    pub async fn list(&self) -> Vec<HistoryRecord> {
        let mut cursor = self.cursor.lock().await;
        match self.load(&mut cursor).await {
            Ok(records) => records,
            Err(e) => {
                log::error!("history read failed, returning empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Removes the record with the given id, if present.
    ///
    /// Idempotent: a missing id is a successful no-op. The returned flag
    /// reports whether a record was actually removed, for UI feedback.
    pub async fn remove_by_id(&self, id: &str) -> Result<bool, HistoryError> {
        let mut cursor = self.cursor.lock().await;
        let mut records = self.load(&mut cursor).await?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }

        self.persist(&records).await?;
        Ok(true)
    }

    /// Removes the persisted collection entirely. Idempotent.
    pub async fn clear(&self) -> Result<(), HistoryError> {
        let _cursor = self.cursor.lock().await;
        self.backend
            .remove(&self.key)
            .await
            .map_err(|e| HistoryError::BackendError(e.to_string()))
    }

    /// Loads the persisted sequence. Assumes the cursor lock is held.
    ///
    /// A blob that fails to parse is preserved under the quarantine key and
    /// the main key is reset, so a corrupted history never bricks the app
    /// while the raw bytes stay recoverable.
    async fn load(&self, _cursor: &mut IdCursor) -> Result<Vec<HistoryRecord>, HistoryError> {
        let raw = self
            .backend
            .get(&self.key)
            .await
            .map_err(|e| HistoryError::BackendError(e.to_string()))?;

        let raw = match raw {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Vec<HistoryRecord>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!(
                    "history blob failed to parse ({}), quarantining under {}",
                    e,
                    self.quarantine_key
                );
                if let Err(e) = self.backend.set(&self.quarantine_key, &raw).await {
                    log::warn!("failed to quarantine malformed history blob: {}", e);
                }
                if let Err(e) = self.backend.remove(&self.key).await {
                    log::warn!("failed to reset malformed history blob: {}", e);
                }
                Ok(Vec::new())
            }
        }
    }

    /// Serializes and persists the full sequence.
    async fn persist(&self, records: &[HistoryRecord]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(records)
            .map_err(|e| HistoryError::SerializationError(e.to_string()))?;
        self.backend
            .set(&self.key, &json)
            .await
            .map_err(|e| HistoryError::BackendError(e.to_string()))
    }
}
