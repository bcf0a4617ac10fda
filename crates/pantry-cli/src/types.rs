use std::path::PathBuf;

use pantry_model::ParsedBatch;

#[derive(Debug)]
pub struct ParseRunResult {
    pub files: Vec<FileSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub source: PathBuf,
    pub batch: ParsedBatch,
    pub report_path: Option<PathBuf>,
    pub rejects_path: Option<PathBuf>,
}
