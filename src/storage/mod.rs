//! Qio persistence layer.
//!
//! The scan history lives in an asynchronous key-value store: string keys to
//! string values, durable across restarts, scoped to the application's
//! private data directory. This mirrors the async-storage layers mobile
//! platforms provide, which are themselves a single SQLite key-value table
//! on device.
//!
//! # Usage
//!
//! ```no_run
//! use qio::storage::SqliteBackend;
//!
//! // Open a persistent backend
//! let backend = SqliteBackend::open("qio.db").expect("failed to open backend");
//!
//! // Or use an in-memory backend for testing
//! let backend = SqliteBackend::open_in_memory().expect("failed to open backend");
//! ```

pub mod backend;
pub mod sqlite;

pub use backend::{MemoryBackend, StorageBackend};
pub use sqlite::SqliteBackend;
