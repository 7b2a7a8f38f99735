//! Route table error types.

use std::path::PathBuf;

/// Errors raised while loading the route table.
///
/// All of these are configuration errors: the server must not start
/// serving with a table it could not load.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The data file could not be opened
    #[error("could not open route table {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV, or a row does not fit the header
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns are absent from the header
    #[error("required columns missing: {missing:?} (available: {available:?})")]
    MissingColumns {
        missing: Vec<&'static str>,
        available: Vec<String>,
    },
}
