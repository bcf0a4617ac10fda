//! Blank import template generation, the structural inverse of the
//! parser: every emitted header is an exact alias-table phrase, so a
//! re-uploaded template maps with zero unmapped columns.

use std::path::Path;

use anyhow::{Context, Result};

use pantry_schema::{AliasTable, FieldKey};

/// Two illustrative rows, keyed by field. Values stay clear of
/// instruction markers and primary header keywords so a filled template
/// still scores its header row highest.
fn sample_value(field: FieldKey, row: usize) -> &'static str {
    match (field, row) {
        (FieldKey::Name, 0) => "Harbor Bistro",
        (FieldKey::Name, _) => "Cedar Grove Market",
        (FieldKey::Priority, 0) => "A",
        (FieldKey::Priority, _) => "B",
        (FieldKey::Segment, 0) => "Fine Dining",
        (FieldKey::Segment, _) => "Retail",
        (FieldKey::OrganizationType, 0) => "Operator",
        (FieldKey::OrganizationType, _) => "Principal",
        (FieldKey::Distributor, 0) => "US Foods",
        (FieldKey::Distributor, _) => "Sysco",
        (FieldKey::PrimaryManager, 0) => "Avery Chen",
        (FieldKey::PrimaryManager, _) => "Riley Park",
        (FieldKey::SecondaryManager, 0) => "Jordan Diaz",
        (FieldKey::Phone, 0) => "555-0101",
        (FieldKey::Phone, _) => "555-0102",
        (FieldKey::Website, 0) => "https://harborbistro.test",
        (FieldKey::Website, _) => "https://cedargrovemarket.test",
        (FieldKey::AddressLine, 0) => "214 Dock St",
        (FieldKey::AddressLine, _) => "88 Main St",
        (FieldKey::City, 0) => "Portland",
        (FieldKey::City, _) => "Salem",
        (FieldKey::State, _) => "OR",
        (FieldKey::PostalCode, 0) => "97201",
        (FieldKey::PostalCode, _) => "97301",
        (FieldKey::Country, _) => "US",
        (FieldKey::Notes, 0) => "Opened 2024",
        (FieldKey::Active, _) => "TRUE",
        _ => "",
    }
}

/// Renders the template as CSV text: one header row in catalog order
/// plus two sample rows.
pub fn generate_template(aliases: &AliasTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let headers = aliases.template_headers();
    writer
        .write_record(&headers)
        .context("write template headers")?;
    for row in 0..2 {
        let record: Vec<&str> = headers
            .iter()
            .map(|header| {
                aliases
                    .field_for(header)
                    .map(|field| sample_value(field, row))
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record).context("write sample row")?;
    }
    let bytes = writer.into_inner().context("flush template")?;
    String::from_utf8(bytes).context("template is not UTF-8")
}

/// Writes the template to disk.
pub fn write_template(path: &Path, aliases: &AliasTable) -> Result<()> {
    let text = generate_template(aliases)?;
    std::fs::write(path, text).with_context(|| format!("write template: {}", path.display()))
}
