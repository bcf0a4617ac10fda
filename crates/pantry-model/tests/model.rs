//! Tests for pantry-model types.

use std::str::FromStr;

use pantry_model::{
    CsvRow, HeaderMode, ImportError, ImportOptions, OrganizationRecord, OrganizationType,
    Priority, Segment,
};

#[test]
fn priority_round_trips_through_str() {
    for token in ["A", "B", "C", "D"] {
        let parsed = Priority::from_str(token).expect("parse priority");
        assert_eq!(parsed.as_str(), token);
    }
    assert!(Priority::from_str("High").is_err());
}

#[test]
fn segment_parses_spaced_and_cased_variants() {
    assert_eq!(Segment::from_str("Fine Dining").unwrap(), Segment::FineDining);
    assert_eq!(Segment::from_str("fine dining").unwrap(), Segment::FineDining);
    assert_eq!(Segment::from_str("FAST FOOD").unwrap(), Segment::FastFood);
    assert_eq!(Segment::from_str("healthcare").unwrap(), Segment::Healthcare);
    assert!(Segment::from_str("Bistro").is_err());
}

#[test]
fn organization_type_serializes_lowercase() {
    let json = serde_json::to_string(&OrganizationType::Distributor).expect("serialize type");
    assert_eq!(json, "\"distributor\"");
    let round: OrganizationType = serde_json::from_str("\"principal\"").expect("deserialize type");
    assert_eq!(round, OrganizationType::Principal);
}

#[test]
fn record_round_trips_through_json() {
    let mut record = OrganizationRecord {
        name: "Harbor Bistro".to_string(),
        priority: Priority::B,
        segment: Segment::FineDining,
        phone: Some("555-0101".to_string()),
        ..OrganizationRecord::default()
    };
    record.append_import_note("Distributor: US Foods");

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: OrganizationRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round.name, "Harbor Bistro");
    assert_eq!(round.priority, Priority::B);
    assert_eq!(round.import_notes, "Distributor: US Foods");
    assert!(round.active);
    assert_eq!(round.country, "US");
}

#[test]
fn row_blank_detection_ignores_whitespace() {
    let mut row = CsvRow::new();
    row.insert("Name", "   ");
    row.insert("City", "\t");
    assert!(row.is_blank());
    row.insert("Name", "Harbor Bistro");
    assert!(!row.is_blank());
}

#[test]
fn options_serialize_with_snake_case_mode() {
    let options = ImportOptions::default().with_header_mode(HeaderMode::FirstRow);
    let json = serde_json::to_string(&options).expect("serialize options");
    assert!(json.contains("\"first_row\""));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
    let err = ImportError::from(io);
    assert!(matches!(err, ImportError::Io(_)));
    assert!(err.to_string().contains("missing.csv"));
}
