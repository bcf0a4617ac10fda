pub mod extract;
pub mod locate;

pub use extract::{extract_grid, read_grid};
pub use locate::{
    contains_instruction_marker, locate_table, KeywordScorer, RowScorer, HEADER_PROBE_ROWS,
};
