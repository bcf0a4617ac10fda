//! Properties of header normalization, including the chain from raw
//! text through location to normalized keys.

use proptest::prelude::*;

use pantry_ingest::{extract_grid, locate_table, KeywordScorer};
use pantry_map::{build_rows, normalize_headers};
use pantry_model::HeaderMode;
use pantry_schema::AliasTable;

#[test]
fn located_headers_normalize_in_place() {
    let text = "notes for the importer: please fill every column\n\
                Organizations,\"SEGMENT\n(DropDown)\",Favorite Snack\n\
                Acme Foods,Fine Dining,pretzels\n";
    let grid = extract_grid(text).expect("extract");
    let table = locate_table(&grid, HeaderMode::Heuristic, &KeywordScorer).expect("locate");
    let aliases = AliasTable::standard();
    let normalized = normalize_headers(&table.headers, &aliases);

    assert_eq!(
        normalized.keys,
        vec!["Organizations", "SEGMENT (DropDown)", "Favorite Snack"]
    );
    assert_eq!(normalized.unmapped, vec!["Favorite Snack"]);

    let rows = build_rows(&normalized.keys, &table.data_rows);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("SEGMENT (DropDown)"), Some("Fine Dining"));
}

proptest! {
    /// Normalization is idempotent: running the output through again
    /// changes nothing.
    #[test]
    fn normalization_is_idempotent(raw in proptest::collection::vec("[ -~]{0,24}", 0..8)) {
        let aliases = AliasTable::standard();
        let first = normalize_headers(&raw, &aliases);
        let second = normalize_headers(&first.keys, &aliases);
        prop_assert_eq!(second.keys, first.keys);
    }

    /// Exact alias phrases always survive normalization unchanged.
    #[test]
    fn exact_aliases_are_fixed_points(index in 0usize..10) {
        let aliases = AliasTable::standard();
        let phrase = ["Organizations", "PRIORITY-FOCUS (A-D)", "SEGMENT (DropDown)",
                      "TYPE", "DISTRIBUTOR", "PHONE", "WEBSITE", "CITY", "STATE", "NOTES"][index];
        let normalized = normalize_headers(&[phrase.to_string()], &aliases);
        prop_assert_eq!(normalized.keys[0].as_str(), phrase);
    }

    /// Every built row's key set equals the normalized key set.
    #[test]
    fn row_keys_match_headers(
        raw_headers in proptest::collection::vec("[A-Za-z ]{1,12}", 1..6),
        cells in proptest::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let aliases = AliasTable::standard();
        let normalized = normalize_headers(&raw_headers, &aliases);
        let rows = build_rows(&normalized.keys, &[cells]);
        if let Some(row) = rows.first() {
            let expected: std::collections::BTreeSet<&str> =
                normalized.keys.iter().map(String::as_str).collect();
            let actual: std::collections::BTreeSet<&str> =
                row.values.keys().map(String::as_str).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
