//! Rejected-row export: invalid rows written back out for correction
//! and re-upload.

use std::path::Path;

use anyhow::{Context, Result};

use pantry_model::ParsedBatch;

/// Renders the batch's invalid rows as CSV in original column order,
/// with a trailing `Errors` column holding the joined error list.
pub fn rejects_csv(batch: &ParsedBatch) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut header_row: Vec<&str> = batch.headers.iter().map(String::as_str).collect();
    header_row.push("Errors");
    writer.write_record(&header_row).context("write reject headers")?;

    for invalid in &batch.invalid_rows {
        let errors = invalid.errors.join("; ");
        let mut record: Vec<&str> = batch
            .headers
            .iter()
            .map(|key| invalid.row.get(key).unwrap_or(""))
            .collect();
        record.push(&errors);
        writer.write_record(&record).context("write reject row")?;
    }
    let bytes = writer.into_inner().context("flush rejects")?;
    String::from_utf8(bytes).context("rejects are not UTF-8")
}

/// Writes the reject file to disk.
pub fn write_rejects(path: &Path, batch: &ParsedBatch) -> Result<()> {
    let text = rejects_csv(batch)?;
    std::fs::write(path, text).with_context(|| format!("write rejects: {}", path.display()))
}
