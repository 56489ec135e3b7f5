//! # Sheetbase
//!
//! Schema-agnostic access to an embedded DuckDB store, plus an importer that
//! turns every sheet of a workbook into a table of text columns.
//!
//! ## Features
//!
//! - **Dynamic schema**: table and column names are plain strings supplied at
//!   call time, validated or quoted before they reach SQL
//! - **Bound values**: data values are always passed as parameters
//! - **Catalog discovery**: tables and columns are read from the live store
//! - **Multi-format import**: Excel (`.xls`, `.xlsx`, `.xlsm`, `.xlsb`, `.xla`,
//!   `.xlam`) and OpenDocument (`.ods`) workbooks
//! - **Per-sheet reporting**: a failing sheet never stops the others
//!
//! ## Example
//!
//! ```no_run
//! use sheetbase::Database;
//!
//! let database = Database::open("ums.duckdb")?;
//! let report = database.import_workbook("UMS_Data.xlsx")?;
//! for sheet in &report.sheets {
//!     println!("{sheet}");
//! }
//! let row = database.get_row("Subjects", "Subject Code", "MATH001");
//! # Ok::<(), sheetbase::SheetbaseError>(())
//! ```
pub mod database;
pub mod error;
pub mod import;
pub mod spreadsheet;

pub use database::accessor::Record;
pub use database::Database;
pub use database::DatabaseOptions;
pub use error::SheetbaseError;
pub use import::ImportOptions;
pub use import::ImportReport;
pub use import::SheetOutcome;
pub use import::SheetReport;
pub use spreadsheet::Cell;
pub use spreadsheet::MemorySpreadsheet;
pub use spreadsheet::Spreadsheet;
