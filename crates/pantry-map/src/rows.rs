//! Row building: zip normalized keys with data cells.

use pantry_model::CsvRow;

/// Builds one [`CsvRow`] per data row by pairing keys with cells in
/// position order. Values are trimmed; a short row pads with empty
/// strings; surplus cells past the header width are dropped. Rows that
/// are entirely empty after trimming are discarded.
#[must_use]
pub fn build_rows(keys: &[String], data_rows: &[Vec<String>]) -> Vec<CsvRow> {
    data_rows
        .iter()
        .filter_map(|cells| {
            let mut row = CsvRow::new();
            for (index, key) in keys.iter().enumerate() {
                let value = cells.get(index).map(String::as_str).unwrap_or("");
                row.insert(key, value.trim());
            }
            if row.is_blank() { None } else { Some(row) }
        })
        .collect()
}
