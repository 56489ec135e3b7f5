//! Column inference from a sheet's header row.
use crate::database::identifier::sanitize;
use crate::spreadsheet::sheet::Row;
use crate::spreadsheet::sheet::Sheet;
use std::collections::HashSet;
use thiserror::Error;

/// Errors related to turning a header row into a table definition.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Missing header row in sheet '{0}'")]
    MissingHeaderRow(String),

    #[error("Missing column name at '{1}' in sheet '{0}'")]
    MissingColumnName(String, String),

    #[error("Sheet '{0}' has no usable table name")]
    MissingTableName(String),
}

/// Suffix appended to a column name that is already taken in the same header.
pub const DUPLICATE_SUFFIX: &str = "_duplicate";

/// Declared type of every imported column.
pub const COLUMN_TYPE: &str = "VARCHAR";

/// A column of an imported table.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name (from header row, possibly suffixed)
    pub name: String,
}

impl Column {
    /// Column definition for a `CREATE TABLE` statement.
    pub fn definition(&self) -> String {
        format!("{} {}", sanitize(&self.name), COLUMN_TYPE)
    }
}

/// Derives the column list from a header row.
///
/// Each header cell's trimmed text becomes a column name. The header ends at
/// its last non-empty cell. Names colliding with an earlier one (ignoring case)
/// get [`DUPLICATE_SUFFIX`], then `_duplicate2`, `_duplicate3`, ... until unique.
///
/// # Errors
///
/// Fails if the header has no cells, or if any cell up to the last non-empty
/// one is absent or blank.
pub fn infer_columns(sheet: &Sheet, header: &Row) -> Result<Vec<Column>, SchemaError> {
    let width = header.width();
    if width == 0 {
        return Err(SchemaError::MissingHeaderRow(sheet.name.to_owned()));
    }

    let mut names = HashSet::<String>::new();
    let mut columns = Vec::<Column>::with_capacity(width);
    for position in 0..width {
        let candidate = header
            .get(position)
            .to_text()
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| SchemaError::MissingColumnName(sheet.name.to_owned(), sheet.reference(header, position)))?;

        let mut name = candidate.to_owned();
        let mut attempt = 1usize;
        while !names.insert(name.to_lowercase()) {
            name = if attempt == 1 {
                format!("{candidate}{DUPLICATE_SUFFIX}")
            } else {
                format!("{candidate}{DUPLICATE_SUFFIX}{attempt}")
            };
            attempt += 1;
        }
        columns.push(Column { name });
    }
    Ok(columns)
}
