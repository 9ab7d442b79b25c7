//! Property-based tests for history record serialization.
//!
//! The persisted blob is a JSON array of records; serializing any sequence
//! and deserializing it back must yield records equal in all fields.

use proptest::prelude::*;

use qio::types::history::{HistoryRecord, RecordKind};

fn arb_kind() -> impl Strategy<Value = RecordKind> {
    prop_oneof![
        Just(RecordKind::Qr),
        Just(RecordKind::Link),
        Just(RecordKind::Text),
        Just(RecordKind::Wifi),
        Just(RecordKind::Barcode),
    ]
}

fn arb_record() -> impl Strategy<Value = HistoryRecord> {
    (
        1_000_000_000_000i64..2_000_000_000_000i64,
        arb_kind(),
        "[a-zA-Z0-9 .:/_-]{0,40}",
        "[a-zA-Z0-9 -]{0,20}",
        ".{0,60}",
    )
        .prop_map(|(instant, kind, title, subtitle, payload)| HistoryRecord {
            id: instant.to_string(),
            kind,
            title,
            subtitle,
            created_at: instant,
            payload,
        })
}

// **Property: blob round-trip**
//
// *For any* sequence of 0 to 100 records, serializing and deserializing
// SHALL yield the same records, field for field.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn record_sequence_roundtrips(
        records in proptest::collection::vec(arb_record(), 0..=100),
    ) {
        let json = serde_json::to_string(&records).expect("serialize should succeed");
        let parsed: Vec<HistoryRecord> =
            serde_json::from_str(&json).expect("deserialize should succeed");
        prop_assert_eq!(parsed, records);
    }
}

/// The persisted shape uses camelCase field names, so blobs written by
/// other front-ends of the app stay readable.
#[test]
fn test_persisted_field_names_are_camel_case() {
    let record = HistoryRecord {
        id: "1700000000000".to_string(),
        kind: RecordKind::Link,
        title: "Example".to_string(),
        subtitle: "QR Code".to_string(),
        created_at: 1_700_000_000_000,
        payload: "https://example.com".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["createdAt"], 1_700_000_000_000i64);
    assert_eq!(json["kind"], "link");
    assert!(json.get("created_at").is_none());
}

/// Deterministic spot-check at the contract's stated sizes.
#[test]
fn test_roundtrip_at_fixed_sizes() {
    for n in [0usize, 1, 100] {
        let records: Vec<HistoryRecord> = (0..n)
            .map(|i| HistoryRecord {
                id: (1_700_000_000_000 + i as i64).to_string(),
                kind: RecordKind::Qr,
                title: format!("record {}", i),
                subtitle: "Scanned Code".to_string(),
                created_at: 1_700_000_000_000 + i as i64,
                payload: format!("payload {}", i),
            })
            .collect();

        let json = serde_json::to_string(&records).unwrap();
        let parsed: Vec<HistoryRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }
}
