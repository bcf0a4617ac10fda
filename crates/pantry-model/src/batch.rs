use serde::{Deserialize, Serialize};

use crate::record::{CsvRow, OrganizationRecord};

/// A data row paired with the required-field errors that kept it out of
/// the valid set. Zero errors means the row validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowValidation {
    /// Zero-based index into the built data rows.
    pub row_index: usize,
    pub row: CsvRow,
    pub errors: Vec<String>,
}

/// Non-blocking warning attached to a data row, e.g. an enum value that
/// only resolved through its fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAdvisory {
    pub row_index: usize,
    pub field: String,
    pub message: String,
}

/// Complete output of one import pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedBatch {
    /// Normalized header keys, in source column order.
    pub headers: Vec<String>,
    /// Every built data row, valid or not.
    pub rows: Vec<CsvRow>,
    /// Canonical records for rows with zero validation errors.
    pub valid_rows: Vec<OrganizationRecord>,
    /// Rows excluded by required-field rules, for correction and re-upload.
    pub invalid_rows: Vec<RowValidation>,
    /// Advisory warnings that did not block any row.
    pub advisories: Vec<RowAdvisory>,
    /// Normalized keys that did not resolve through the alias table.
    pub unmapped_columns: Vec<String>,
}

impl ParsedBatch {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn valid_count(&self) -> usize {
        self.valid_rows.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_rows.len()
    }

    pub fn has_invalid_rows(&self) -> bool {
        !self.invalid_rows.is_empty()
    }
}
