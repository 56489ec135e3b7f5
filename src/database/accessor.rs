//! Row-level CRUD against any table, addressed by name at call time.
use crate::database::collapse;
use crate::database::identifier::sanitize;
use crate::database::table::placeholders;
use crate::database::Database;
use crate::error::SheetbaseError;
use duckdb::params;
use duckdb::params_from_iter;
use std::iter::once;
use tracing::debug;

/// Values of one row, `None` standing for NULL.
pub type Record = Vec<Option<String>>;

impl Database {
    /// Inserts a row by position, one placeholder per value.
    ///
    /// The value count is not checked against a cached schema: a row that does
    /// not fit the table is rejected by the store and reported as
    /// `SchemaMismatch`, with nothing inserted.
    pub fn try_insert_row(&self, table: &str, values: &[Option<&str>]) -> Result<bool, SheetbaseError> {
        let sql = format!("INSERT INTO {} VALUES ({})", sanitize(table), placeholders(values.len()));
        debug!(%sql, "Insert row");
        let rows = self
            .connection
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(|e| classify_insert_error(table, e))?;
        Ok(rows > 0)
    }

    /// Sets `set_columns` to `set_values` on every row where `match_column = match_value`.
    ///
    /// Returns whether at least one row matched.
    ///
    /// # Errors
    ///
    /// `ArityMismatch` if the column and value counts differ; nothing is executed.
    pub fn try_update_row(
        &self,
        table: &str,
        match_column: &str,
        match_value: &str,
        set_columns: &[&str],
        set_values: &[&str],
    ) -> Result<bool, SheetbaseError> {
        if set_columns.len() != set_values.len() {
            return Err(SheetbaseError::ArityMismatch {
                columns: set_columns.len(),
                values: set_values.len(),
            });
        }
        let assignments = set_columns
            .iter()
            .map(|column| format!("{} = ?", sanitize(column)))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            sanitize(table),
            assignments,
            sanitize(match_column)
        );
        debug!(%sql, "Update row");
        // Assigned values first, the match value binds the last placeholder
        let values = set_values.iter().copied().chain(once(match_value));
        let rows = self.connection.execute(&sql, params_from_iter(values))?;
        Ok(rows > 0)
    }

    /// Deletes every row where `match_column = match_value`.
    pub fn try_delete_row(&self, table: &str, match_column: &str, match_value: &str) -> Result<bool, SheetbaseError> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", sanitize(table), sanitize(match_column));
        debug!(%sql, "Delete row");
        let rows = self.connection.execute(&sql, params![match_value])?;
        Ok(rows > 0)
    }

    /// First row where `match_column = match_value`, in table column order.
    /// Empty if no row matches.
    pub fn try_get_row(&self, table: &str, match_column: &str, match_value: &str) -> Result<Record, SheetbaseError> {
        let columns = self.require_columns(table)?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ? LIMIT 1",
            text_projection(&columns),
            sanitize(table),
            sanitize(match_column)
        );
        let mut records = self.select_records(&sql, params![match_value], columns.len())?;
        Ok(if records.is_empty() { Vec::new() } else { records.swap_remove(0) })
    }

    /// Projects `columns` of every row where `match_column = match_value`,
    /// in the order the store returns them.
    pub fn try_get_filtered_columns(
        &self,
        table: &str,
        columns: &[&str],
        match_column: &str,
        match_value: &str,
    ) -> Result<Vec<Record>, SheetbaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            text_projection(columns),
            sanitize(table),
            sanitize(match_column)
        );
        self.select_records(&sql, params![match_value], columns.len())
    }

    /// Single-column form of [`Database::try_get_filtered_columns`].
    pub fn try_get_filtered_column(
        &self,
        table: &str,
        column: &str,
        match_column: &str,
        match_value: &str,
    ) -> Result<Record, SheetbaseError> {
        let records = self.try_get_filtered_columns(table, &[column], match_column, match_value)?;
        Ok(records.into_iter().flatten().collect())
    }

    /// Every value of `column`, skipping NULL and blank values.
    pub fn try_get_column_values(&self, table: &str, column: &str) -> Result<Vec<String>, SheetbaseError> {
        let sql = format!("SELECT {} FROM {}", text_projection(&[column]), sanitize(table));
        let records = self.select_records(&sql, [], 1)?;
        Ok(records
            .into_iter()
            .flatten()
            .flatten()
            .filter(|value| !value.trim().is_empty())
            .collect())
    }

    /// Whether any row has `column = value`.
    pub fn try_value_exists(&self, table: &str, column: &str, value: &str) -> Result<bool, SheetbaseError> {
        let sql = format!("SELECT 1 FROM {} WHERE {} = ? LIMIT 1", sanitize(table), sanitize(column));
        let mut statement = self.connection.prepare(&sql)?;
        let mut rows = statement.query(params![value])?;
        Ok(rows.next()?.is_some())
    }

    pub fn insert_row(&self, table: &str, values: &[Option<&str>]) -> bool {
        collapse(self.try_insert_row(table, values), "Insert row")
    }

    pub fn update_row(
        &self,
        table: &str,
        match_column: &str,
        match_value: &str,
        set_columns: &[&str],
        set_values: &[&str],
    ) -> bool {
        collapse(
            self.try_update_row(table, match_column, match_value, set_columns, set_values),
            "Update row",
        )
    }

    pub fn delete_row(&self, table: &str, match_column: &str, match_value: &str) -> bool {
        collapse(self.try_delete_row(table, match_column, match_value), "Delete row")
    }

    pub fn get_row(&self, table: &str, match_column: &str, match_value: &str) -> Record {
        collapse(self.try_get_row(table, match_column, match_value), "Get row")
    }

    pub fn get_filtered_columns(
        &self,
        table: &str,
        columns: &[&str],
        match_column: &str,
        match_value: &str,
    ) -> Vec<Record> {
        collapse(
            self.try_get_filtered_columns(table, columns, match_column, match_value),
            "Get filtered columns",
        )
    }

    pub fn get_filtered_column(&self, table: &str, column: &str, match_column: &str, match_value: &str) -> Record {
        collapse(
            self.try_get_filtered_column(table, column, match_column, match_value),
            "Get filtered column",
        )
    }

    pub fn get_column_values(&self, table: &str, column: &str) -> Vec<String> {
        collapse(self.try_get_column_values(table, column), "Get column values")
    }

    pub fn value_exists(&self, table: &str, column: &str, value: &str) -> bool {
        collapse(self.try_value_exists(table, column, value), "Check value")
    }

    /// Runs a query whose result has `width` text columns.
    fn select_records<P: duckdb::Params>(&self, sql: &str, params: P, width: usize) -> Result<Vec<Record>, SheetbaseError> {
        debug!(%sql, "Select rows");
        let mut statement = self.connection.prepare(sql)?;
        let records = statement
            .query_map(params, |row| {
                (0..width)
                    .map(|index| row.get::<_, Option<String>>(index))
                    .collect::<Result<Record, _>>()
            })?
            .collect::<Result<Vec<Record>, _>>()?;
        Ok(records)
    }
}

/// Select list casting every column to text, so any column type reads back as a string.
fn text_projection<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|column| format!("CAST({} AS VARCHAR)", sanitize(column.as_ref())))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tells a row that does not fit the table apart from other store failures.
fn classify_insert_error(table: &str, error: duckdb::Error) -> SheetbaseError {
    let message = error.to_string();
    if message.contains("values were supplied") {
        SheetbaseError::SchemaMismatch {
            table: table.to_owned(),
            message,
        }
    } else {
        SheetbaseError::QueryError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database() -> Database {
        let database = Database::open_in_memory().unwrap();
        database
            .connection()
            .execute_batch(
                r#"
                CREATE TABLE Subjects ("Subject Code" VARCHAR, "Subject Name" VARCHAR);
                INSERT INTO Subjects VALUES ('MATH001', 'Calculus'), ('PHYS001', 'Mechanics');
                CREATE TABLE Faculties ("Faculty ID" VARCHAR, Name VARCHAR, Degree VARCHAR);
                INSERT INTO Faculties VALUES ('F0001', 'Ann', 'CS'), ('F0002', 'Ben', 'Math');
                "#,
            )
            .unwrap();
        database
    }

    fn count(database: &Database, table: &str) -> i64 {
        database
            .connection()
            .query_row(&format!("SELECT count(*) FROM {}", sanitize(table)), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn insert_row_by_position() {
        let database = database();
        assert!(database.insert_row("Subjects", &[Some("CHEM001"), Some("Organic Chemistry")]));
        assert_eq!(
            database.get_row("Subjects", "Subject Code", "CHEM001"),
            vec![Some("CHEM001".to_owned()), Some("Organic Chemistry".to_owned())]
        );
    }

    #[test]
    fn insert_row_binds_null() {
        let database = database();
        assert!(database.insert_row("Subjects", &[Some("BIO001"), None]));
        assert_eq!(database.get_row("Subjects", "Subject Code", "BIO001"), vec![Some("BIO001".to_owned()), None]);
    }

    #[test]
    fn insert_row_with_wrong_arity_inserts_nothing() {
        let database = database();
        assert!(!database.insert_row("Subjects", &[Some("onlyOneValue")]));
        assert_eq!(count(&database, "Subjects"), 2);
        let error = database.try_insert_row("Subjects", &[Some("onlyOneValue")]).unwrap_err();
        assert!(matches!(
            error,
            SheetbaseError::SchemaMismatch { table, message } if table == "Subjects" && message.contains("values were supplied")
        ));
    }

    #[test]
    fn insert_row_into_missing_table_fails() {
        assert!(!database().insert_row("Rooms", &[Some("R101")]));
    }

    #[test]
    fn values_are_bound_not_interpolated() {
        let database = database();
        let hostile = "x'); DROP TABLE Subjects; --";
        assert!(database.insert_row("Subjects", &[Some(hostile), Some("quote ' inside")]));
        assert_eq!(count(&database, "Subjects"), 3);
        assert!(database.value_exists("Subjects", "Subject Code", hostile));
    }

    #[test]
    fn update_row_sets_columns() {
        let database = database();
        assert!(database.update_row(
            "Subjects",
            "Subject Code",
            "MATH001",
            &["Subject Code", "Subject Name"],
            &["MATH101", "Linear Algebra"],
        ));
        assert_eq!(
            database.get_row("Subjects", "Subject Code", "MATH101"),
            vec![Some("MATH101".to_owned()), Some("Linear Algebra".to_owned())]
        );
        assert!(database.get_row("Subjects", "Subject Code", "MATH001").is_empty());
    }

    #[test]
    fn update_row_without_match_returns_false() {
        let database = database();
        assert!(!database.update_row("Subjects", "Subject Code", "NONE", &["Subject Name"], &["x"]));
    }

    #[test]
    fn update_row_arity_mismatch_is_rejected() {
        let database = database();
        let error = database
            .try_update_row("Subjects", "Subject Code", "MATH001", &["Subject Name"], &["a", "b"])
            .unwrap_err();
        assert!(matches!(error, SheetbaseError::ArityMismatch { columns: 1, values: 2 }));
        assert!(!database.update_row("Subjects", "Subject Code", "MATH001", &["Subject Name"], &[]));
        assert_eq!(
            database.get_row("Subjects", "Subject Code", "MATH001"),
            vec![Some("MATH001".to_owned()), Some("Calculus".to_owned())]
        );
    }

    #[test]
    fn delete_row_removes_only_matching_rows() {
        let database = database();
        assert!(database.delete_row("Subjects", "Subject Code", "MATH001"));
        assert_eq!(database.get_column_values("Subjects", "Subject Code"), vec!["PHYS001"]);
        assert!(!database.delete_row("Subjects", "Subject Code", "MATH001"));
    }

    #[test]
    fn delete_row_with_unknown_column_returns_false() {
        let database = database();
        assert!(!database.delete_row("Subjects", "Code", "MATH001"));
        assert!(database.try_delete_row("Subjects", "Code", "MATH001").is_err());
        assert_eq!(count(&database, "Subjects"), 2);
    }

    #[test]
    fn get_row_without_match_is_empty() {
        assert!(database().get_row("Subjects", "Subject Code", "NONE").is_empty());
        assert!(database().get_row("Rooms", "Code", "R101").is_empty());
    }

    #[test]
    fn get_row_renders_non_text_columns() {
        let database = database();
        database
            .connection()
            .execute_batch("CREATE TABLE Rooms (Code VARCHAR, Seats INTEGER, Lab BOOLEAN); INSERT INTO Rooms VALUES ('R101', 40, true)")
            .unwrap();
        assert_eq!(
            database.get_row("Rooms", "Code", "R101"),
            vec![Some("R101".to_owned()), Some("40".to_owned()), Some("true".to_owned())]
        );
    }

    #[test]
    fn get_filtered_columns_projects_named_columns() {
        let database = database();
        assert_eq!(
            database.get_filtered_columns("Faculties", &["Name", "Degree"], "Faculty ID", "F0001"),
            vec![vec![Some("Ann".to_owned()), Some("CS".to_owned())]]
        );
        assert!(database
            .get_filtered_columns("Faculties", &["Name", "Degree"], "Faculty ID", "F9999")
            .is_empty());
    }

    #[test]
    fn get_filtered_columns_returns_every_match() {
        let database = database();
        assert!(database.insert_row("Faculties", &[Some("F0003"), Some("Cat"), Some("CS")]));
        let mut names = database.get_filtered_column("Faculties", "Name", "Degree", "CS");
        names.sort();
        assert_eq!(names, vec![Some("Ann".to_owned()), Some("Cat".to_owned())]);
    }

    #[test]
    fn get_filtered_columns_with_unknown_column_is_empty() {
        assert!(database()
            .get_filtered_columns("Faculties", &["Salary"], "Faculty ID", "F0001")
            .is_empty());
    }

    #[test]
    fn get_column_values_skips_null_and_blank() {
        let database = database();
        assert!(database.insert_row("Subjects", &[None, Some("Unnamed")]));
        assert!(database.insert_row("Subjects", &[Some("  "), Some("Blank")]));
        let mut codes = database.get_column_values("Subjects", "Subject Code");
        codes.sort();
        assert_eq!(codes, vec!["MATH001", "PHYS001"]);
    }

    #[test]
    fn value_exists_checks_column() {
        let database = database();
        assert!(database.value_exists("Subjects", "Subject Code", "MATH001"));
        assert!(!database.value_exists("Subjects", "Subject Name", "MATH001"));
        assert!(!database.value_exists("Rooms", "Code", "R101"));
    }
}
