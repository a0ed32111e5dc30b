use thiserror::Error;

use crate::column::ColumnType;

/// Error type for table, grouping and group-function operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("No grouping columns were given")]
    EmptyGroupingColumns,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("The function you provided yields an array of false length: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Function '{0}' returned a sequence where a scalar was expected")]
    ScalarExpected(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Column type mismatch: column {name}, expected {expected:?}, found {found:?}")]
    ColumnTypeMismatch {
        name: String,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Parallel processing error: {0}")]
    Parallel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[source] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::Parallel(err.to_string())
    }
}
