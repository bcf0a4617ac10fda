//! Raw file text to row-major grid. No row is promoted to headers
//! here; that is the locator's job.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use pantry_model::{ImportError, RawGrid, Result};

/// Trims a cell and strips a stray byte-order mark. Exports from older
/// spreadsheet tools carry the BOM into the first header cell.
fn scrub_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parses comma-separated text into a grid. Rows keep their source
/// order and ragged widths; all-empty rows survive so the locator can
/// see the file's real shape.
pub fn extract_grid(text: &str) -> Result<RawGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|err| ImportError::Parse(format!("unreadable csv record: {err}")))?;
        rows.push(record.iter().map(scrub_cell).collect());
    }
    debug!(rows = rows.len(), "extracted grid");
    Ok(RawGrid { rows })
}

/// Reads a file and extracts its grid. Content must be UTF-8 text.
pub fn read_grid(path: &Path) -> Result<RawGrid> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        ImportError::Parse(format!("{} is not UTF-8 text", path.display()))
    })?;
    extract_grid(&text)
}
