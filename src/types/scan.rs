use serde::{Deserialize, Serialize};

/// Decoded output of the platform barcode scanner.
///
/// The camera layer owns capture and decoding; by the time an event reaches
/// the services layer it is just a payload plus the detected format name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanEvent {
    /// The decoded payload.
    pub data: String,
    /// Barcode format name as reported by the scanner, e.g. "qr", "ean13".
    pub format: String,
}

impl ScanEvent {
    pub fn new(data: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            format: format.into(),
        }
    }
}
