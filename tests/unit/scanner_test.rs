//! Unit tests for scan intake and payload classification.

use rstest::rstest;

use qio::services::scanner::{
    candidate_from_generated, candidate_from_scan, detect_kind, format_display_name,
    GENERATED_SUBTITLE,
};
use qio::types::history::RecordKind;
use qio::types::scan::ScanEvent;

#[rstest]
#[case("https://example.com", "qr", RecordKind::Link)]
#[case("http://example.com/path?q=1", "qr", RecordKind::Link)]
#[case("WIFI:S:HomeNet;T:WPA;P:secret;;", "qr", RecordKind::Wifi)]
#[case("Call me tomorrow at noon", "qr", RecordKind::Text)]
#[case("hello\nworld", "qr", RecordKind::Text)]
#[case("PROD-0042", "qr", RecordKind::Qr)]
#[case("4006381333931", "ean13", RecordKind::Barcode)]
#[case("https://example.com", "code128", RecordKind::Barcode)]
#[case("WIFI:S:Net;;", "ean8", RecordKind::Barcode)]
fn test_detect_kind(#[case] payload: &str, #[case] format: &str, #[case] expected: RecordKind) {
    assert_eq!(detect_kind(payload, format), expected);
}

#[test]
fn test_scan_candidate_carries_format_subtitle() {
    let event = ScanEvent::new("4006381333931", "ean13");
    let candidate = candidate_from_scan(&event);

    assert_eq!(candidate.payload, "4006381333931");
    assert_eq!(candidate.kind, Some(RecordKind::Barcode));
    assert_eq!(candidate.subtitle.as_deref(), Some("EAN-13"));
    assert!(candidate.title.is_none());
    assert!(candidate.id.is_none());
}

#[test]
fn test_scan_candidate_unknown_format_leaves_subtitle_to_store() {
    let event = ScanEvent::new("payload", "mystery_format");
    let candidate = candidate_from_scan(&event);

    // The store fills in the generic placeholder
    assert!(candidate.subtitle.is_none());
    assert_eq!(candidate.kind, Some(RecordKind::Barcode));
}

#[test]
fn test_generated_candidate() {
    let candidate = candidate_from_generated("https://scanova.app");

    assert_eq!(candidate.payload, "https://scanova.app");
    assert_eq!(candidate.kind, Some(RecordKind::Link));
    assert_eq!(candidate.subtitle.as_deref(), Some(GENERATED_SUBTITLE));
}

#[rstest]
#[case("qr", Some("QR Code"))]
#[case("ean13", Some("EAN-13"))]
#[case("code128", Some("Code 128"))]
#[case("datamatrix", Some("Data Matrix"))]
#[case("not_a_format", None)]
fn test_format_display_name(#[case] format: &str, #[case] expected: Option<&str>) {
    assert_eq!(format_display_name(format), expected);
}
