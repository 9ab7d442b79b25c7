//! Scan and generation intake.
//!
//! The camera layer decodes codes and the generator screen produces content;
//! both end up here, where a payload is classified into a record kind and
//! shaped into a candidate for the history store.

use crate::types::history::{RecordCandidate, RecordKind};
use crate::types::scan::ScanEvent;

/// Subtitle applied to records created from the generator screen.
pub const GENERATED_SUBTITLE: &str = "Generated Code";

/// Display name for a barcode format as reported by the scanner.
pub fn format_display_name(format: &str) -> Option<&'static str> {
    match format {
        "qr" => Some("QR Code"),
        "ean8" => Some("EAN-8"),
        "ean13" => Some("EAN-13"),
        "upc_a" => Some("UPC-A"),
        "upc_e" => Some("UPC-E"),
        "code39" => Some("Code 39"),
        "code93" => Some("Code 93"),
        "code128" => Some("Code 128"),
        "itf14" => Some("ITF-14"),
        "pdf417" => Some("PDF417"),
        "aztec" => Some("Aztec"),
        "datamatrix" => Some("Data Matrix"),
        _ => None,
    }
}

/// Classifies a decoded payload.
///
/// Any one-dimensional (non-QR) format is a barcode regardless of content.
/// QR payloads are inspected: Wi-Fi provisioning strings, then URLs, then
/// prose; anything else stays the generic QR kind.
pub fn detect_kind(payload: &str, format: &str) -> RecordKind {
    if !format.is_empty() && format != "qr" {
        return RecordKind::Barcode;
    }
    if payload.starts_with("WIFI:") {
        return RecordKind::Wifi;
    }
    if payload.starts_with("http://") || payload.starts_with("https://") {
        return RecordKind::Link;
    }
    if payload.trim().contains(char::is_whitespace) {
        return RecordKind::Text;
    }
    RecordKind::Qr
}

/// Shapes a scan event into a history candidate.
///
/// The subtitle is the detected format's display name; unknown formats fall
/// through to the store's generic placeholder.
pub fn candidate_from_scan(event: &ScanEvent) -> RecordCandidate {
    RecordCandidate {
        payload: event.data.clone(),
        kind: Some(detect_kind(&event.data, &event.format)),
        subtitle: format_display_name(&event.format).map(str::to_string),
        ..RecordCandidate::default()
    }
}

/// Shapes generator input into a history candidate.
pub fn candidate_from_generated(content: &str) -> RecordCandidate {
    RecordCandidate {
        payload: content.to_string(),
        kind: Some(detect_kind(content, "qr")),
        subtitle: Some(GENERATED_SUBTITLE.to_string()),
        ..RecordCandidate::default()
    }
}
