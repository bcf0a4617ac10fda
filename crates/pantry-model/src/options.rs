use serde::{Deserialize, Serialize};

/// How the pipeline decides which row carries the column headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMode {
    /// Score the first few rows and pick the best header candidate.
    #[default]
    Heuristic,
    /// Treat the grid's first row as the header unconditionally.
    FirstRow,
}

/// Caller-facing knobs for one import pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub header_mode: HeaderMode,
    /// Promote unrecognized enum values from advisories to row errors.
    pub strict_enums: bool,
}

impl ImportOptions {
    #[must_use]
    pub fn with_header_mode(mut self, mode: HeaderMode) -> Self {
        self.header_mode = mode;
        self
    }

    #[must_use]
    pub fn with_strict_enums(mut self, strict: bool) -> Self {
        self.strict_enums = strict;
        self
    }
}
