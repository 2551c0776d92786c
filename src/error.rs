use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for one export run.
/// Every variant except `RowDecode` aborts the run before any output is
/// written; `RowDecode` is logged and the offending row skipped.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("database file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open database connection: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("failed to execute export query: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("failed to decode row: {0}")]
    RowDecode(#[source] rusqlite::Error),

    #[error("error iterating over rows: {0}")]
    Iteration(#[source] rusqlite::Error),

    #[error("failed to serialize posts to JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to write JSON to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Route a cursor error to the taxonomy: column-decode failures become
/// `RowDecode` (skippable), everything else is a fatal `Iteration` error.
pub(crate) fn classify_row_error(e: rusqlite::Error) -> ExportError {
    use rusqlite::Error::*;
    match e {
        InvalidColumnType(..)
        | FromSqlConversionFailure(..)
        | IntegralValueOutOfRange(..)
        | InvalidColumnIndex(_)
        | InvalidColumnName(_)
        | Utf8Error(_) => ExportError::RowDecode(e),
        other => ExportError::Iteration(other),
    }
}
