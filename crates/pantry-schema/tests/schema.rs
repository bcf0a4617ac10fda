//! Integration tests for the schema tables: alias lookups, enum token
//! resolution, and overlay merging.

use proptest::prelude::*;

use pantry_model::{OrganizationType, Priority, Segment};
use pantry_schema::{clean_phrase, AliasTable, FieldKey, ImportSchema, SchemaOverlay, ALL_FIELDS};

#[test]
fn template_headers_resolve_back_to_their_fields() {
    let table = AliasTable::standard();
    for (header, field) in table.template_headers().iter().zip(ALL_FIELDS) {
        assert_eq!(
            table.lookup_exact(header),
            Some(field),
            "template header '{header}' must be an exact alias of {field}"
        );
    }
}

#[test]
fn newline_header_resolves_to_registered_phrase() {
    let table = AliasTable::standard();
    let (phrase, field) = table
        .lookup_cleaned("SEGMENT\n(DropDown)")
        .expect("cleaned match");
    assert_eq!(phrase, "SEGMENT (DropDown)");
    assert_eq!(field, FieldKey::Segment);
}

#[test]
fn overlay_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("overlay.json");
    std::fs::write(
        &path,
        r#"{ "aliases": { "Buying Group": "distributor" }, "segment_tokens": { "deli": "Retail" } }"#,
    )
    .expect("write overlay");

    let overlay = SchemaOverlay::from_path(&path).expect("load overlay");
    let schema = ImportSchema::with_overlay(&overlay).expect("apply overlay");
    assert_eq!(
        schema.aliases.lookup_exact("Buying Group"),
        Some(FieldKey::Distributor)
    );
    assert_eq!(schema.segment.resolve("Deli").value, Segment::Retail);
}

proptest! {
    /// Cleaning is idempotent: a cleaned phrase cleans to itself.
    #[test]
    fn clean_phrase_is_idempotent(raw in "\\PC{0,40}") {
        let once = clean_phrase(&raw);
        prop_assert_eq!(clean_phrase(&once), once);
    }

    /// Every enum mapping returns a defined value for arbitrary text.
    #[test]
    fn enum_resolution_is_total(raw in "\\PC{0,40}") {
        let schema = ImportSchema::standard();
        let priority = schema.priority.resolve(&raw);
        let segment = schema.segment.resolve(&raw);
        let org_type = schema.organization_type.resolve(&raw);
        if priority.fell_back {
            prop_assert_eq!(priority.value, Priority::D);
        }
        if segment.fell_back {
            prop_assert_eq!(segment.value, Segment::General);
        }
        if org_type.fell_back {
            prop_assert_eq!(org_type.value, OrganizationType::Unknown);
        }
    }

    /// Cleaned lookup never invents fields: any hit maps to a phrase
    /// already in the table.
    #[test]
    fn cleaned_hits_point_at_registered_phrases(raw in "\\PC{0,40}") {
        let table = AliasTable::standard();
        if let Some((phrase, field)) = table.lookup_cleaned(&raw) {
            prop_assert_eq!(table.lookup_exact(phrase), Some(field));
        }
    }
}
