//! # Spreadsheet Module
//!
//! Reader abstraction over workbooks. A [`Spreadsheet`] yields its sheets in
//! workbook order, each as a [`Sheet`] of typed [`Cell`]s. Excel and
//! OpenDocument files are decoded by [`CalamineSpreadsheet`];
//! [`MemorySpreadsheet`] serves sheets built in code.
pub mod cell;
pub mod memory;
pub mod reference;
pub mod sheet;
pub mod workbook;

pub use cell::Cell;
pub use memory::MemorySpreadsheet;
pub use sheet::Row;
pub use sheet::Sheet;
pub use workbook::CalamineSpreadsheet;

use std::ffi::OsStr;
use std::path::Path;
use thiserror::Error;

/// Errors raised while opening or decoding a workbook.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("Cannot detect file format for '{0}'")]
    FileFormatError(String),

    #[error("{0}")]
    CalamineError(#[from] calamine::Error),

    #[error("Sheet '{1}' not found in '{0}'")]
    SheetNotFoundError(String, String),
}

/// A source of sheets, opened once per import.
pub trait Spreadsheet {
    /// Name of the workbook, usually its file path.
    fn name(&self) -> String;

    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Reads every row of the named sheet.
    fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet, SpreadsheetError>;
}

/// File extensions accepted by [`open_spreadsheet`].
const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlam", "xlsb", "xls", "xla", "ods"];

/// Opens a workbook file, choosing the decoder from its extension.
pub fn open_spreadsheet<P: AsRef<Path>>(path: P) -> Result<Box<dyn Spreadsheet>, SpreadsheetError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(|extension| extension.to_ascii_lowercase());
    match extension {
        Some(extension) if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) => {
            Ok(Box::new(CalamineSpreadsheet::open(path)?))
        }
        _ => Err(SpreadsheetError::FileFormatError(path.to_string_lossy().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let error = open_spreadsheet("UMS_Data.csv").err().unwrap();
        assert!(matches!(error, SpreadsheetError::FileFormatError(name) if name == "UMS_Data.csv"));
        assert!(open_spreadsheet("no_extension").is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.xlsx");
        let error = open_spreadsheet(&path).err().unwrap();
        assert!(matches!(error, SpreadsheetError::CalamineError(_)));
    }
}
