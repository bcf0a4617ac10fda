//! JSON batch report for the persistence collaborator and audit trail.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use pantry_model::{OrganizationRecord, ParsedBatch, RowAdvisory, RowValidation};

/// Serializable summary of one import pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub headers: Vec<String>,
    pub unmapped_columns: Vec<String>,
    pub records: Vec<OrganizationRecord>,
    pub rejects: Vec<RowValidation>,
    pub advisories: Vec<RowAdvisory>,
}

impl BatchReport {
    #[must_use]
    pub fn from_batch(batch: &ParsedBatch, source: Option<&Path>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.map(|path| path.display().to_string()),
            total_rows: batch.row_count(),
            valid_rows: batch.valid_count(),
            invalid_rows: batch.invalid_count(),
            headers: batch.headers.clone(),
            unmapped_columns: batch.unmapped_columns.clone(),
            records: batch.valid_rows.clone(),
            rejects: batch.invalid_rows.clone(),
            advisories: batch.advisories.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize batch report")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).with_context(|| format!("write report: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_match_the_batch() {
        let mut batch = ParsedBatch::default();
        batch.headers = vec!["Organizations".to_string()];
        batch.rows.push(pantry_model::CsvRow::new());
        batch.valid_rows.push(OrganizationRecord {
            name: "Acme Foods".to_string(),
            ..OrganizationRecord::default()
        });

        let report = BatchReport::from_batch(&batch, None);
        assert_eq!(report.total_rows, 1);
        assert_eq!(report.valid_rows, 1);
        assert_eq!(report.invalid_rows, 0);
        assert!(report.generated_at.ends_with('Z'));
    }

    #[test]
    fn report_serializes_without_a_source_key_when_absent() {
        let report = BatchReport::from_batch(&ParsedBatch::default(), None);
        let json = report.to_json().expect("serialize");
        assert!(!json.contains("\"source\""));

        let with_source =
            BatchReport::from_batch(&ParsedBatch::default(), Some(Path::new("orgs.csv")));
        let json = with_source.to_json().expect("serialize");
        assert!(json.contains("\"source\": \"orgs.csv\""));
    }
}
