use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{OrganizationType, Priority, Segment};

/// One data row keyed by normalized header.
///
/// The key set equals the normalized header list for the batch; missing
/// trailing cells are materialized as empty strings so that equality holds
/// for every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub values: BTreeMap<String, String>,
}

impl CsvRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// True when every cell is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }
}

/// Canonical organization record produced by the field transformer.
///
/// Every field carries a documented default so the transformer can degrade
/// gracefully instead of failing on partial or noisy sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub name: String,
    pub priority: Priority,
    pub segment: Segment,
    #[serde(rename = "type")]
    pub organization_type: OrganizationType,
    pub distributor: Option<String>,
    pub primary_manager: Option<String>,
    pub secondary_manager: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub notes: Option<String>,
    pub active: bool,
    /// Provenance trail: unmapped columns and fallback annotations.
    /// Append-only, semicolon-delimited.
    pub import_notes: String,
}

impl Default for OrganizationRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            priority: Priority::default(),
            segment: Segment::default(),
            organization_type: OrganizationType::default(),
            distributor: None,
            primary_manager: None,
            secondary_manager: None,
            phone: None,
            website: None,
            linkedin: None,
            address_line: None,
            city: None,
            state: None,
            postal_code: None,
            country: "US".to_string(),
            notes: None,
            active: true,
            import_notes: String::new(),
        }
    }
}

impl OrganizationRecord {
    /// Append a provenance note, keeping earlier notes intact.
    pub fn append_import_note(&mut self, note: &str) {
        if note.is_empty() {
            return;
        }
        if !self.import_notes.is_empty() {
            self.import_notes.push_str("; ");
        }
        self.import_notes.push_str(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_documented() {
        let record = OrganizationRecord::default();
        assert_eq!(record.priority, Priority::D);
        assert_eq!(record.segment, Segment::General);
        assert_eq!(record.organization_type, OrganizationType::Customer);
        assert_eq!(record.country, "US");
        assert!(record.active);
        assert!(record.import_notes.is_empty());
        assert!(record.distributor.is_none());
    }

    #[test]
    fn import_notes_append_only() {
        let mut record = OrganizationRecord::default();
        record.append_import_note("Original type was 'key partner'");
        record.append_import_note("Extra Col: 42");
        assert_eq!(
            record.import_notes,
            "Original type was 'key partner'; Extra Col: 42"
        );
    }

    #[test]
    fn record_serializes_type_field() {
        let record = OrganizationRecord {
            name: "Acme Foods".to_string(),
            ..OrganizationRecord::default()
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["type"], "customer");
        assert_eq!(json["priority"], "D");
        assert_eq!(json["segment"], "General");
    }
}
