//! Turns key/value rows into canonical organization records.
//!
//! The transformer never fails: unrecognized enum text degrades to the
//! mapping's fallback, unknown columns land in the import notes, and
//! every field starts from its documented default.

use std::collections::BTreeSet;

use tracing::trace;

use pantry_model::{CsvRow, OrganizationRecord};
use pantry_schema::{EnumMapping, FieldKey, ImportSchema};

/// Resolves one enum value, annotating the record when the mapping fell
/// back and is flagged to preserve originals.
fn resolve_enum<T: Copy>(
    record: &mut OrganizationRecord,
    mapping: &EnumMapping<T>,
    field: FieldKey,
    raw: &str,
) -> T {
    let resolved = mapping.resolve(raw);
    if resolved.fell_back && mapping.notes_original() {
        record.append_import_note(&format!("Original {field} was '{raw}'"));
    }
    resolved.value
}

/// Builds a canonical record from one row.
///
/// `keys` carries the normalized headers in source-column order, which
/// fixes the order of fallback annotations and unmapped-column notes.
/// Empty values leave the field at its default.
#[must_use]
pub fn transform_row(row: &CsvRow, keys: &[String], schema: &ImportSchema) -> OrganizationRecord {
    let mut record = OrganizationRecord::default();
    let mut unmapped: Vec<(&str, &str)> = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for key in keys {
        if !seen.insert(key.as_str()) {
            continue;
        }
        let Some(value) = row.get(key) else { continue };
        if value.is_empty() {
            continue;
        }
        match schema.aliases.field_for(key) {
            Some(FieldKey::Name) => record.name = value.to_string(),
            Some(FieldKey::Priority) => {
                record.priority = resolve_enum(&mut record, &schema.priority, FieldKey::Priority, value);
            }
            Some(FieldKey::Segment) => {
                record.segment = resolve_enum(&mut record, &schema.segment, FieldKey::Segment, value);
            }
            Some(FieldKey::OrganizationType) => {
                record.organization_type = resolve_enum(
                    &mut record,
                    &schema.organization_type,
                    FieldKey::OrganizationType,
                    value,
                );
            }
            Some(FieldKey::Distributor) => record.distributor = Some(value.to_string()),
            Some(FieldKey::PrimaryManager) => record.primary_manager = Some(value.to_string()),
            Some(FieldKey::SecondaryManager) => record.secondary_manager = Some(value.to_string()),
            Some(FieldKey::Phone) => record.phone = Some(value.to_string()),
            Some(FieldKey::Website) => record.website = Some(value.to_string()),
            Some(FieldKey::Linkedin) => record.linkedin = Some(value.to_string()),
            Some(FieldKey::AddressLine) => record.address_line = Some(value.to_string()),
            Some(FieldKey::City) => record.city = Some(value.to_string()),
            Some(FieldKey::State) => record.state = Some(value.to_string()),
            Some(FieldKey::PostalCode) => record.postal_code = Some(value.to_string()),
            Some(FieldKey::Country) => record.country = value.to_string(),
            Some(FieldKey::Notes) => record.notes = Some(value.to_string()),
            Some(FieldKey::Active) => record.active = true,
            None => unmapped.push((key.as_str(), value)),
        }
    }

    for (key, value) in unmapped {
        record.append_import_note(&format!("{key}: {value}"));
    }
    trace!(name = %record.name, notes = %record.import_notes, "transformed row");
    record
}
