//! End-to-end import pipeline.
//!
//! One [`ImportPipeline`] owns the configuration tables and the header
//! scoring strategy; each [`ImportPipeline::parse`] call is a pure pass
//! from file text to a [`ParsedBatch`] with no cross-call state, so a
//! single pipeline instance can serve concurrent imports.

use std::path::Path;

use tracing::{debug, info};

use pantry_ingest::{extract_grid, locate_table, read_grid, KeywordScorer, RowScorer};
use pantry_map::{build_rows, normalize_headers};
use pantry_model::{
    ImportOptions, ParsedBatch, RawGrid, Result, RowAdvisory, RowValidation,
};
use pantry_schema::ImportSchema;
use pantry_transform::transform_row;
use pantry_validate::validate_row;

pub struct ImportPipeline {
    schema: ImportSchema,
    options: ImportOptions,
    scorer: Box<dyn RowScorer + Send + Sync>,
}

impl ImportPipeline {
    #[must_use]
    pub fn new(schema: ImportSchema, options: ImportOptions) -> Self {
        Self {
            schema,
            options,
            scorer: Box::new(KeywordScorer),
        }
    }

    /// Built-in tables, heuristic header detection, lenient enums.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ImportSchema::standard(), ImportOptions::default())
    }

    /// Swaps in an alternate header scoring strategy.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl RowScorer + Send + Sync + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    #[must_use]
    pub fn schema(&self) -> &ImportSchema {
        &self.schema
    }

    #[must_use]
    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Parses file text into a batch. Fatal [`ImportError::Parse`] and
    /// [`ImportError::Structure`] conditions abort; row-level problems
    /// never do — the batch always comes back, even if every row is
    /// invalid.
    ///
    /// [`ImportError::Parse`]: pantry_model::ImportError::Parse
    /// [`ImportError::Structure`]: pantry_model::ImportError::Structure
    pub fn parse(&self, text: &str) -> Result<ParsedBatch> {
        let grid = extract_grid(text)?;
        self.parse_grid(&grid)
    }

    /// Reads and parses a file. The read is the only I/O-bound stage.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedBatch> {
        let grid = read_grid(path)?;
        self.parse_grid(&grid)
    }

    fn parse_grid(&self, grid: &RawGrid) -> Result<ParsedBatch> {
        let table = locate_table(grid, self.options.header_mode, self.scorer.as_ref())?;
        let normalized = normalize_headers(&table.headers, &self.schema.aliases);
        let rows = build_rows(&normalized.keys, &table.data_rows);
        debug!(
            header_index = table.header_index,
            columns = normalized.keys.len(),
            rows = rows.len(),
            "built rows"
        );

        let mut batch = ParsedBatch {
            headers: normalized.keys,
            unmapped_columns: normalized.unmapped,
            ..ParsedBatch::default()
        };
        for (row_index, row) in rows.iter().enumerate() {
            let issues = validate_row(row, &self.schema, &self.options);
            for warning in issues.warnings {
                batch.advisories.push(RowAdvisory {
                    row_index,
                    field: warning.field.to_string(),
                    message: warning.message,
                });
            }
            if issues.errors.is_empty() {
                batch
                    .valid_rows
                    .push(transform_row(row, &batch.headers, &self.schema));
            } else {
                batch.invalid_rows.push(RowValidation {
                    row_index,
                    row: row.clone(),
                    errors: issues.errors,
                });
            }
        }
        batch.rows = rows;

        info!(
            valid = batch.valid_count(),
            invalid = batch.invalid_count(),
            advisories = batch.advisories.len(),
            unmapped = batch.unmapped_columns.len(),
            "parsed batch"
        );
        Ok(batch)
    }
}

impl Default for ImportPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
