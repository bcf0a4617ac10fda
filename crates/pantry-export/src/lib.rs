pub mod rejects;
pub mod report;
pub mod template;

pub use rejects::{rejects_csv, write_rejects};
pub use report::BatchReport;
pub use template::{generate_template, write_template};
