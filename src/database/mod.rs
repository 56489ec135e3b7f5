//! # Database Module
//!
//! Schema-agnostic access to the embedded store. Table and column names are
//! supplied at call time as plain strings and always pass through
//! [`identifier::sanitize`] before being written into SQL text; data values
//! are always bound as parameters.
//!
//! Operations come in two layers:
//!
//! - `try_*` methods return `Result<T, SheetbaseError>` with the store's error;
//! - methods without the prefix log the error and return a conservative value
//!   (`false` or an empty collection).
pub mod accessor;
pub mod catalog;
pub mod identifier;
pub mod schema;
pub mod table;

use crate::error::SheetbaseError;
use duckdb::AccessMode;
use duckdb::Config;
use duckdb::Connection;
use std::path::Path;
use tracing::error;
use tracing::info;

/// Options applied when opening a file-backed store.
#[derive(Clone, Debug, Default)]
pub struct DatabaseOptions {
    /// Open the store without write access (default: false)
    pub read_only: bool,
    /// Worker threads used by the store, store default if None
    pub threads: Option<i64>,
}

impl DatabaseOptions {
    fn to_config(&self) -> Result<Config, duckdb::Error> {
        let mut config = Config::default();
        if self.read_only {
            config = config.access_mode(AccessMode::ReadOnly)?;
        }
        if let Some(threads) = self.threads {
            config = config.threads(threads)?;
        }
        Ok(config)
    }
}

/// A single live connection to the store.
///
/// Opened once and reused for every operation. There is no pooling and no
/// internal locking: callers sharing a `Database` across threads must
/// serialize access themselves.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the store file at `path` with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SheetbaseError> {
        Self::open_with(path, &DatabaseOptions::default())
    }

    /// Opens (or creates) the store file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the options are rejected or the file
    /// cannot be opened.
    pub fn open_with<P: AsRef<Path>>(path: P, options: &DatabaseOptions) -> Result<Self, SheetbaseError> {
        let name = path.as_ref().to_string_lossy().to_string();
        let connection = options
            .to_config()
            .and_then(|config| Connection::open_with_flags(path, config))
            .map_err(|source| SheetbaseError::ConnectionError {
                path: name.to_owned(),
                source,
            })?;
        info!(path = %name, read_only = options.read_only, "Connected to database");
        Ok(Self { connection })
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> Result<Self, SheetbaseError> {
        let connection = Connection::open_in_memory().map_err(|source| SheetbaseError::ConnectionError {
            path: ":memory:".to_owned(),
            source,
        })?;
        info!("Connected to in-memory database");
        Ok(Self { connection })
    }

    /// Wraps an already opened connection.
    pub fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Underlying store connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

/// Logs a failed operation and returns the type's default value instead.
pub(crate) fn collapse<T: Default>(result: Result<T, SheetbaseError>, action: &str) -> T {
    result.unwrap_or_else(|e| {
        error!(error = %e, "{} failed", action);
        T::default()
    })
}
