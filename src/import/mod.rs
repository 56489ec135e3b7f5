//! # Import Module
//!
//! Loads every sheet of a workbook into its own table:
//!
//! 1. the table name is the sheet name with spaces removed;
//! 2. a sheet without rows is skipped and no table is created;
//! 3. the first row is the header, turned into text columns by
//!    [`infer_columns`];
//! 4. the table is created if absent, an existing table is appended to;
//! 5. every remaining row is inserted one at a time through a single
//!    prepared statement naming the target columns.
//!
//! A failure stops the current sheet only. Rows inserted before it stay
//! committed and the remaining sheets are still processed.
pub mod options;
pub mod report;

pub use options::ImportOptions;
pub use report::ImportReport;
pub use report::SheetOutcome;
pub use report::SheetReport;

use crate::database::schema::infer_columns;
use crate::database::schema::SchemaError;
use crate::database::table::Table;
use crate::database::Database;
use crate::error::ResultMessage;
use crate::error::SheetbaseError;
use crate::spreadsheet::open_spreadsheet;
use crate::spreadsheet::Spreadsheet;
use duckdb::params_from_iter;
use std::path::Path;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

impl Database {
    /// Imports every sheet of the workbook at `path` with default options.
    pub fn import_workbook<P: AsRef<Path>>(&self, path: P) -> Result<ImportReport, SheetbaseError> {
        self.import_workbook_with(path, &ImportOptions::default())
    }

    /// Imports the sheets of the workbook at `path` selected by `options`.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` only when the workbook cannot be opened at all.
    /// Failures of individual sheets are recorded in the report.
    pub fn import_workbook_with<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ImportOptions,
    ) -> Result<ImportReport, SheetbaseError> {
        let mut spreadsheet = open_spreadsheet(path.as_ref()).map_err(|source| SheetbaseError::ImportError {
            path: path.as_ref().to_string_lossy().to_string(),
            source,
        })?;
        Ok(self.import_spreadsheet(spreadsheet.as_mut(), options))
    }

    /// Imports the sheets of an already opened spreadsheet, in sheet order.
    pub fn import_spreadsheet(&self, spreadsheet: &mut dyn Spreadsheet, options: &ImportOptions) -> ImportReport {
        let mut report = ImportReport {
            name: spreadsheet.name(),
            sheets: Vec::new(),
        };
        for sheet_name in spreadsheet.sheet_names() {
            if !options.accept(&sheet_name) {
                debug!(sheet = %sheet_name, "Sheet not selected");
                continue;
            }
            let table_name = Table::name_from_sheet(&sheet_name);
            info!(sheet = %sheet_name, table = %table_name, "Processing sheet");

            let mut rows = 0usize;
            let outcome = match self.import_sheet(spreadsheet, &sheet_name, &table_name, options, &mut rows) {
                Ok(Some(columns)) => {
                    info!(table = %table_name, rows, "Imported sheet");
                    SheetOutcome::Imported { columns, rows }
                }
                Ok(None) => {
                    warn!(sheet = %sheet_name, "Skipping empty sheet");
                    SheetOutcome::SkippedEmpty
                }
                Err(e) => {
                    error!(sheet = %sheet_name, rows, error = %e, "Import sheet failed");
                    SheetOutcome::Failed {
                        reason: e.to_string(),
                        rows,
                    }
                }
            };
            report.sheets.push(SheetReport {
                sheet_name,
                table_name,
                outcome,
            });
        }
        report
    }

    /// Imports one sheet, counting inserted rows in `inserted`.
    /// Returns the final column names, or `None` for an empty sheet.
    fn import_sheet(
        &self,
        spreadsheet: &mut dyn Spreadsheet,
        sheet_name: &str,
        table_name: &str,
        options: &ImportOptions,
        inserted: &mut usize,
    ) -> Result<Option<Vec<String>>, SheetbaseError> {
        let sheet = spreadsheet
            .read_sheet(sheet_name)
            .map_err(|source| SheetbaseError::ImportError {
                path: spreadsheet.name(),
                source,
            })?;

        let mut records = sheet
            .rows
            .iter()
            .filter(|row| !options.skip_empty_rows || !row.is_empty());
        let header = match records.next() {
            Some(header) => header,
            None => return Ok(None),
        };
        if table_name.is_empty() {
            return Err(SchemaError::MissingTableName(sheet_name.to_owned()).into());
        }

        let table = Table {
            name: table_name.to_owned(),
            columns: infer_columns(&sheet, header)?,
        };

        let sql = table.create_statement();
        debug!(%sql, "Create table");
        self.connection()
            .execute(&sql, [])
            .map_err(SheetbaseError::from)
            .with_prefix(&format!("Create table '{}'", table.name))?;

        let sql = table.insert_statement();
        debug!(%sql, "Insert rows");
        let mut statement = self
            .connection()
            .prepare(&sql)
            .map_err(SheetbaseError::from)
            .with_prefix(&format!("Prepare insert into '{}'", table.name))?;
        for row in records {
            // Cells past the row's end bind NULL
            let values = (0..table.columns.len())
                .map(|position| options.to_value(row.get(position).to_text()))
                .collect::<Vec<_>>();
            statement
                .execute(params_from_iter(values.iter()))
                .map_err(SheetbaseError::from)
                .with_prefix(&format!("Insert row {} into '{}'", row.index + 1, table.name))?;
            *inserted += 1;
        }

        Ok(Some(table.columns.into_iter().map(|column| column.name).collect()))
    }
}
