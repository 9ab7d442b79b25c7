//! Types for the scan history store.

use serde::{Deserialize, Serialize};

/// Subtitle used when a candidate does not carry one, and when a stored
/// record predates the subtitle field.
pub const DEFAULT_SUBTITLE: &str = "Scanned Code";

/// Category of a history record, driving how the entry is rendered and
/// which actions apply to it.
///
/// Stored data with an unrecognized kind falls back to [`RecordKind::Qr`]
/// instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Link,
    Text,
    Wifi,
    Barcode,
    #[serde(other)]
    Qr,
}

impl Default for RecordKind {
    fn default() -> Self {
        RecordKind::Qr
    }
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qr => "qr",
            Self::Link => "link",
            Self::Text => "text",
            Self::Wifi => "wifi",
            Self::Barcode => "barcode",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Qr => "QR Code",
            Self::Link => "Link",
            Self::Text => "Text",
            Self::Wifi => "Wi-Fi Network",
            Self::Barcode => "Barcode",
        }
    }
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_string()
}

/// One persisted scan or generation event.
///
/// Immutable after creation; the store removes records but never edits them
/// in place. `kind`, `title` and `subtitle` are optional in stored data so
/// blobs written by an older schema keep parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Unique within the store; derives from the creation instant.
    pub id: String,
    #[serde(default)]
    pub kind: RecordKind,
    /// Primary display string, typically the decoded payload.
    #[serde(default)]
    pub title: String,
    /// Secondary display string, typically the barcode format name.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Capture time, epoch milliseconds.
    pub created_at: i64,
    /// The raw scanned or generated data.
    pub payload: String,
}

/// Partial input to [`HistoryStore::add`](crate::managers::history_store::HistoryStore::add).
///
/// Only `payload` is required; every other field falls back to a documented
/// default when `None` or empty.
#[derive(Debug, Clone, Default)]
pub struct RecordCandidate {
    pub payload: String,
    /// Explicit id. Synthesized from the creation instant when absent;
    /// rejected if it collides with a persisted record.
    pub id: Option<String>,
    /// Defaults to [`RecordKind::Qr`].
    pub kind: Option<RecordKind>,
    /// Defaults to the payload.
    pub title: Option<String>,
    /// Defaults to [`DEFAULT_SUBTITLE`].
    pub subtitle: Option<String>,
    /// Capture time override, epoch milliseconds.
    pub created_at: Option<i64>,
}

impl RecordCandidate {
    /// Creates a candidate carrying only a payload.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }
}
