use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Input could not be read as tabular text. Fatal for the batch.
    #[error("parse error: {0}")]
    Parse(String),
    /// Header or data rows could not be located confidently. Fatal for the
    /// batch; the message tells the user to check the file format.
    #[error("structure error: {0}")]
    Structure(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;
