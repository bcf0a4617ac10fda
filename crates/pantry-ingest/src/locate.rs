//! Header row location: noise filtering plus weighted keyword scoring.

use tracing::debug;

use pantry_model::{HeaderMode, ImportError, LocatedTable, RawGrid, Result};

/// Rows past this depth are never considered header candidates.
pub const HEADER_PROBE_ROWS: usize = 8;

/// Phrases that mark a row as instructions rather than headers or data.
const INSTRUCTION_MARKERS: &[&str] = &[
    "instruction",
    "please fill",
    "please enter",
    "do not edit",
    "how to use",
    "start entering",
    "delete this row",
    "required fields",
];

/// Header terms worth +10 per matching cell.
const PRIMARY_KEYWORDS: &[&str] = &[
    "organization",
    "company",
    "account",
    "customer",
    "name",
    "priority",
];

/// Header terms worth +5 per matching cell.
const SECONDARY_KEYWORDS: &[&str] = &[
    "segment",
    "type",
    "distributor",
    "manager",
    "phone",
    "city",
    "state",
];

/// Header terms worth +3 per matching cell.
const TERTIARY_KEYWORDS: &[&str] = &[
    "website", "linkedin", "address", "zip", "postal", "country", "notes", "active",
];

/// Scoring strategy for header candidates. Alternate heuristics plug in
/// here without touching the rest of the pipeline.
pub trait RowScorer {
    fn score(&self, row: &[String]) -> i32;
}

impl<F> RowScorer for F
where
    F: Fn(&[String]) -> i32,
{
    fn score(&self, row: &[String]) -> i32 {
        self(row)
    }
}

/// Default scorer: weighted keyword tiers plus +1 per non-empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl RowScorer for KeywordScorer {
    fn score(&self, row: &[String]) -> i32 {
        let mut score = 0;
        for cell in row {
            let text = cell.trim().to_lowercase();
            if text.is_empty() {
                continue;
            }
            score += 1;
            if PRIMARY_KEYWORDS.iter().any(|kw| text.contains(kw)) {
                score += 10;
            } else if SECONDARY_KEYWORDS.iter().any(|kw| text.contains(kw)) {
                score += 5;
            } else if TERTIARY_KEYWORDS.iter().any(|kw| text.contains(kw)) {
                score += 3;
            }
        }
        score
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Whether any sample value or cell reads as instruction text.
#[must_use]
pub fn contains_instruction_marker(text: &str) -> bool {
    let lowered = text.to_lowercase();
    INSTRUCTION_MARKERS.iter().any(|m| lowered.contains(m))
}

fn is_noise_row(row: &[String]) -> bool {
    if is_blank_row(row) {
        return true;
    }
    if row
        .first()
        .is_some_and(|cell| cell.trim_start().starts_with('='))
    {
        return true;
    }
    let joined = row.join(" ");
    contains_instruction_marker(&joined)
}

/// Splits a grid into one header row and its data rows.
///
/// Heuristic mode filters noise rows, scores the first
/// [`HEADER_PROBE_ROWS`] survivors, and picks the max-score row with
/// earliest-index tie-breaking; a scorer that rates every candidate at
/// zero or below falls back to the first surviving row. FirstRow mode
/// takes the grid's first row verbatim and keeps subsequent non-blank
/// rows as data.
pub fn locate_table(
    grid: &RawGrid,
    mode: HeaderMode,
    scorer: &dyn RowScorer,
) -> Result<LocatedTable> {
    match mode {
        HeaderMode::FirstRow => locate_first_row(grid),
        HeaderMode::Heuristic => locate_heuristic(grid, scorer),
    }
}

fn locate_first_row(grid: &RawGrid) -> Result<LocatedTable> {
    let Some(headers) = grid.rows.first() else {
        return Err(ImportError::Structure(
            "no valid headers or data found".to_string(),
        ));
    };
    let data_rows = grid
        .rows
        .iter()
        .skip(1)
        .filter(|row| !is_blank_row(row.as_slice()))
        .cloned()
        .collect();
    Ok(LocatedTable {
        header_index: 0,
        headers: headers.clone(),
        data_rows,
    })
}

fn locate_heuristic(grid: &RawGrid, scorer: &dyn RowScorer) -> Result<LocatedTable> {
    let filtered: Vec<(usize, &Vec<String>)> = grid
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !is_noise_row(row.as_slice()))
        .collect();
    if filtered.is_empty() {
        return Err(ImportError::Structure(
            "no valid headers or data found".to_string(),
        ));
    }

    let mut best_position = 0usize;
    let mut best_score = i32::MIN;
    for (position, (_, row)) in filtered.iter().take(HEADER_PROBE_ROWS).enumerate() {
        let score = scorer.score(row.as_slice());
        if score > best_score {
            best_score = score;
            best_position = position;
        }
    }
    if best_score <= 0 {
        best_position = 0;
    }

    let (header_index, headers) = filtered[best_position];
    let data_rows: Vec<Vec<String>> = filtered[best_position + 1..]
        .iter()
        .map(|(_, row)| (*row).clone())
        .collect();
    debug!(
        header_index,
        score = best_score,
        data_rows = data_rows.len(),
        "located header row"
    );
    Ok(LocatedTable {
        header_index,
        headers: headers.clone(),
        data_rows,
    })
}
