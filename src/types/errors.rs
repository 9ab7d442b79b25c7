use std::fmt;

// === StorageError ===

/// Errors produced by the key-value persistence backend.
#[derive(Debug)]
pub enum StorageError {
    /// A file system or device I/O operation failed.
    IoError(String),
    /// The underlying database rejected the operation.
    DatabaseError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === HistoryError ===

/// Errors related to scan history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// The persistence backend read or write failed.
    BackendError(String),
    /// Encoding the record sequence for persistence failed.
    SerializationError(String),
    /// A caller-supplied record id collides with a persisted record.
    DuplicateId(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::BackendError(msg) => write!(f, "History backend error: {}", msg),
            HistoryError::SerializationError(msg) => {
                write!(f, "History serialization error: {}", msg)
            }
            HistoryError::DuplicateId(id) => write!(f, "Duplicate history record id: {}", id),
        }
    }
}

impl std::error::Error for HistoryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === NavigationError ===

/// Errors related to screen navigation.
#[derive(Debug)]
pub enum NavigationError {
    /// The screen cannot be activated as a root tab.
    NotATab(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NotATab(name) => write!(f, "Screen is not a tab: {}", name),
        }
    }
}

impl std::error::Error for NavigationError {}
