pub mod batch;
pub mod enums;
pub mod error;
pub mod grid;
pub mod options;
pub mod record;

pub use batch::{ParsedBatch, RowAdvisory, RowValidation};
pub use enums::{OrganizationType, Priority, Segment};
pub use error::{ImportError, Result};
pub use grid::{LocatedTable, RawGrid};
pub use options::{HeaderMode, ImportOptions};
pub use record::{CsvRow, OrganizationRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_counts() {
        let mut batch = ParsedBatch::default();
        batch.rows.push(CsvRow::new());
        batch.rows.push(CsvRow::new());
        batch.valid_rows.push(OrganizationRecord::default());
        batch.invalid_rows.push(RowValidation {
            row_index: 1,
            row: CsvRow::new(),
            errors: vec!["Organization name is required".to_string()],
        });
        assert_eq!(batch.row_count(), 2);
        assert_eq!(batch.valid_count(), 1);
        assert_eq!(batch.invalid_count(), 1);
        assert!(batch.has_invalid_rows());
    }

    #[test]
    fn batch_serializes() {
        let mut batch = ParsedBatch::default();
        batch.headers = vec!["Name".to_string(), "PRIORITY-FOCUS (A-D)".to_string()];
        batch.advisories.push(RowAdvisory {
            row_index: 0,
            field: "segment".to_string(),
            message: "Unrecognized segment 'Bistro'".to_string(),
        });
        let json = serde_json::to_string(&batch).expect("serialize batch");
        let round: ParsedBatch = serde_json::from_str(&json).expect("deserialize batch");
        assert_eq!(round.headers.len(), 2);
        assert_eq!(round.advisories.len(), 1);
    }
}
