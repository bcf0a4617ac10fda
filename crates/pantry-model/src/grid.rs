/// Row-major grid of string cells as extracted from a source file.
///
/// No row has been promoted to a header and blank rows are preserved; the
/// header locator decides what is noise and what is data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Output of the header locator: one header row and the data rows below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedTable {
    /// Index of the header row within the filtered row set.
    pub header_index: usize,
    /// Raw header cells, not yet normalized.
    pub headers: Vec<String>,
    /// Data rows below the header, each with at least one non-empty cell.
    pub data_rows: Vec<Vec<String>>,
}

impl LocatedTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
