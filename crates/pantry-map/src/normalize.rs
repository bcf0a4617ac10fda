//! Header normalization: raw header strings to canonical-or-passthrough
//! keys.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use pantry_schema::{AliasTable, FieldKey};

/// Result of normalizing one header row.
#[derive(Debug, Clone)]
pub struct NormalizedHeaders {
    /// One key per source column, in source order.
    pub keys: Vec<String>,
    /// Keys that resolved through the alias table, with their fields.
    pub mapped: Vec<(String, FieldKey)>,
    /// Distinct keys that did not resolve, in first-seen order.
    pub unmapped: Vec<String>,
}

/// Placeholder key for a blank header cell. Position 0 is assumed to be
/// a spreadsheet row-number column; later columns get a 1-based label.
fn placeholder_key(position: usize) -> String {
    if position == 0 {
        "Row_Number".to_string()
    } else {
        format!("Column_{}", position + 1)
    }
}

/// Normalizes raw headers against `aliases`.
///
/// Per header: a blank cell synthesizes a placeholder; an exact alias
/// match keeps the raw string; a match on the cleaned form emits the
/// registered alias phrase (not the cleaned text); anything else passes
/// through trimmed and is reported unmapped. Exact-before-cleaned
/// ordering keeps distinct columns from merging while still absorbing
/// embedded newlines and casing noise.
#[must_use]
pub fn normalize_headers(raw_headers: &[String], aliases: &AliasTable) -> NormalizedHeaders {
    let mut keys = Vec::with_capacity(raw_headers.len());
    let mut mapped = Vec::new();
    let mut unmapped = Vec::new();
    let mut seen_unmapped = BTreeSet::new();

    for (position, raw) in raw_headers.iter().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            let key = placeholder_key(position);
            if seen_unmapped.insert(key.clone()) {
                unmapped.push(key.clone());
            }
            keys.push(key);
        } else if let Some(field) = aliases.lookup_exact(trimmed) {
            mapped.push((trimmed.to_string(), field));
            keys.push(trimmed.to_string());
        } else if let Some((phrase, field)) = aliases.lookup_cleaned(trimmed) {
            mapped.push((phrase.to_string(), field));
            keys.push(phrase.to_string());
        } else {
            if seen_unmapped.insert(trimmed.to_string()) {
                unmapped.push(trimmed.to_string());
            }
            keys.push(trimmed.to_string());
        }
    }

    if !unmapped.is_empty() {
        warn!(columns = ?unmapped, "headers not mapped to canonical fields");
    }
    debug!(
        columns = keys.len(),
        mapped = mapped.len(),
        unmapped = unmapped.len(),
        "normalized headers"
    );
    NormalizedHeaders {
        keys,
        mapped,
        unmapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| (*h).to_string()).collect()
    }

    #[test]
    fn exact_alias_keeps_the_raw_string() {
        let aliases = AliasTable::standard();
        let result = normalize_headers(&headers(&["Organizations", "PHONE"]), &aliases);
        assert_eq!(result.keys, vec!["Organizations", "PHONE"]);
        assert_eq!(result.mapped[0], ("Organizations".to_string(), FieldKey::Name));
        assert!(result.unmapped.is_empty());
    }

    #[test]
    fn cleaned_match_emits_the_registered_phrase() {
        let aliases = AliasTable::standard();
        let result = normalize_headers(&headers(&["SEGMENT\n(DropDown)", "priority"]), &aliases);
        assert_eq!(result.keys[0], "SEGMENT (DropDown)");
        assert_eq!(result.keys[1], "Priority");
        assert_eq!(result.mapped.len(), 2);
    }

    #[test]
    fn blank_headers_get_placeholders() {
        let aliases = AliasTable::standard();
        let result = normalize_headers(&headers(&["", "Organizations", "  "]), &aliases);
        assert_eq!(result.keys, vec!["Row_Number", "Organizations", "Column_3"]);
        assert_eq!(result.unmapped, vec!["Row_Number", "Column_3"]);
    }

    #[test]
    fn unknown_headers_pass_through_trimmed() {
        let aliases = AliasTable::standard();
        let result = normalize_headers(&headers(&["  Favorite Snack  "]), &aliases);
        assert_eq!(result.keys, vec!["Favorite Snack"]);
        assert_eq!(result.unmapped, vec!["Favorite Snack"]);
        assert!(result.mapped.is_empty());
    }

    #[test]
    fn repeated_unknown_headers_are_reported_once() {
        let aliases = AliasTable::standard();
        let result = normalize_headers(&headers(&["Extra", "Extra"]), &aliases);
        assert_eq!(result.keys, vec!["Extra", "Extra"]);
        assert_eq!(result.unmapped, vec!["Extra"]);
    }

    #[test]
    fn already_normalized_headers_are_unchanged() {
        let aliases = AliasTable::standard();
        let first = normalize_headers(
            &headers(&["Organizations", "SEGMENT\n(DropDown)", "Favorite Snack", ""]),
            &aliases,
        );
        let second = normalize_headers(&first.keys, &aliases);
        assert_eq!(second.keys, first.keys);
    }
}
