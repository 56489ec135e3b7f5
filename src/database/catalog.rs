//! Discovery of tables and columns from the store's own metadata.
use crate::database::collapse;
use crate::database::Database;
use crate::error::SheetbaseError;
use duckdb::params;

const LIST_TABLES: &str = "SELECT table_name FROM information_schema.tables \
    WHERE table_schema = current_schema() AND table_type = 'BASE TABLE' \
    ORDER BY table_name";

const LIST_COLUMNS: &str = "SELECT column_name FROM information_schema.columns \
    WHERE table_schema = current_schema() AND lower(table_name) = lower(?) \
    ORDER BY ordinal_position";

const COLUMN_EXISTS: &str = "SELECT count(*) FROM information_schema.columns \
    WHERE table_schema = current_schema() AND lower(table_name) = lower(?) AND lower(column_name) = lower(?)";

impl Database {
    /// User tables of the current schema, ordered by name.
    ///
    /// Views and the store's own catalog tables are not listed.
    pub fn try_list_tables(&self) -> Result<Vec<String>, SheetbaseError> {
        let mut statement = self.connection.prepare(LIST_TABLES)?;
        let tables = statement
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tables)
    }

    /// Column names of `table` in declaration order, read from the live
    /// definition. Empty if the table does not exist.
    pub fn try_list_columns(&self, table: &str) -> Result<Vec<String>, SheetbaseError> {
        let mut statement = self.connection.prepare(LIST_COLUMNS)?;
        let columns = statement
            .query_map(params![table], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// Whether `table` has a column named `field`; false for a missing table.
    pub fn try_column_exists(&self, table: &str, field: &str) -> Result<bool, SheetbaseError> {
        let count: i64 = self
            .connection
            .query_row(COLUMN_EXISTS, params![table, field], |row| row.get(0))?;
        Ok(count > 0)
    }

    pub fn list_tables(&self) -> Vec<String> {
        collapse(self.try_list_tables(), "List tables")
    }

    pub fn list_columns(&self, table: &str) -> Vec<String> {
        collapse(self.try_list_columns(table), "List columns")
    }

    pub fn column_exists(&self, table: &str, field: &str) -> bool {
        collapse(self.try_column_exists(table, field), "Check column")
    }

    /// Column names of `table`, failing with `TableNotFound` if it has none.
    pub(crate) fn require_columns(&self, table: &str) -> Result<Vec<String>, SheetbaseError> {
        let columns = self.try_list_columns(table)?;
        if columns.is_empty() {
            Err(SheetbaseError::TableNotFound(table.to_owned()))
        } else {
            Ok(columns)
        }
    }
}
