use thiserror::Error;

/// Main error type for the sheetbase crate.
/// Aggregates store errors, workbook errors and schema inference errors.
#[derive(Error, Debug)]
pub enum SheetbaseError {
    #[error("{0}")]
    WithContextError(String),

    /// Store file cannot be opened
    #[error("Open database '{path}' failed: {source}")]
    ConnectionError {
        path: String,
        source: duckdb::Error,
    },

    /// Header row cannot be turned into a table definition
    #[error("{0}")]
    SchemaError(#[from] crate::database::schema::SchemaError),

    /// Caller supplied a different number of values than columns
    #[error("Expected {columns} values but got {values}")]
    ArityMismatch { columns: usize, values: usize },

    /// Store rejected a row because it does not fit the table definition
    #[error("Row does not fit table '{table}': {message}")]
    SchemaMismatch { table: String, message: String },

    #[error("Table '{0}' not found")]
    TableNotFound(String),

    /// Any store-level failure while preparing or executing a statement
    #[error("{0}")]
    QueryError(#[from] duckdb::Error),

    /// Workbook cannot be opened at all
    #[error("Import '{path}' failed: {source}")]
    ImportError {
        path: String,
        source: crate::spreadsheet::SpreadsheetError,
    },
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, SheetbaseError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| SheetbaseError::WithContextError(format!("{}: {}", message, e)))
    }
}
