//! Tests for the persisted representation of encodings.

use encoded_url::*;

#[test]
fn test_serialized_form_is_name_plus_raw_identifier() {
    let encoding = CanonicalEncoding::new("shift_jis", EncodingId::new(932));
    let json = serde_json::to_string(&encoding).unwrap();
    assert_eq!(json, r#"{"name":"shift_jis","identifier":932}"#);
}

#[test]
fn test_round_trip() {
    let cases = vec![
        CanonicalEncoding::new("shift_jis", EncodingId::new(932)),
        CanonicalEncoding::new("UTF-8", EncodingId::UTF_8),
        CanonicalEncoding::invalid(),
        CanonicalEncoding::from_id(EncodingId::new(1251)),
    ];

    for encoding in cases {
        let json = serde_json::to_string(&encoding).unwrap();
        let restored: CanonicalEncoding = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, encoding);
        // The display name round-trips too, even though equality ignores it
        assert_eq!(restored.name(), encoding.name());
    }
}

#[test]
fn test_restored_identifier_still_drives_the_encoder() {
    // A configuration saved in one process must behave identically in the
    // next: the raw identifier is the stable code, not a runtime ordinal
    let saved = serde_json::to_string(&CanonicalEncoding::new("sjis", EncodingId::new(932))).unwrap();
    let restored: CanonicalEncoding = serde_json::from_str(&saved).unwrap();

    let encoder = Encoder::new(restored);
    assert_eq!(encoder.encode("テスト", false), "%83e%83X%83g");
}

#[test]
fn test_invalid_sentinel_survives_persistence() {
    let json = serde_json::to_string(&CanonicalEncoding::invalid()).unwrap();
    let restored: CanonicalEncoding = serde_json::from_str(&json).unwrap();
    assert!(restored.id().is_invalid());
    assert_eq!(restored.name(), "invalid utf-8");
}
