pub mod normalize;
pub mod rows;

pub use normalize::{normalize_headers, NormalizedHeaders};
pub use rows::build_rows;
