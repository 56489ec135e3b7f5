use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::sheet::Sheet;
use crate::spreadsheet::Spreadsheet;
use crate::spreadsheet::SpreadsheetError;
use calamine::open_workbook_auto;
use calamine::Reader;
use calamine::Sheets;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Excel (`.xlsx`, `.xlsm`, `.xlam`, `.xlsb`, `.xls`, `.xla`) and OpenDocument (`.ods`) workbook.
pub struct CalamineSpreadsheet {
    /// File name of the spreadsheet
    name: String,
    /// Format-specific reader
    workbook: Sheets<BufReader<File>>,
}

impl CalamineSpreadsheet {
    /// Opens a workbook file and reads its sheet list.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SpreadsheetError> {
        let name = path.as_ref().to_string_lossy().to_string();
        let workbook = open_workbook_auto(path)?;
        Ok(Self { name, workbook })
    }
}

impl Spreadsheet for CalamineSpreadsheet {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Reads the used range of a worksheet.
    ///
    /// Rows are reported from the first used row to the last one. Cells inside
    /// the range that hold no value come back as [`Cell::Empty`].
    fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet, SpreadsheetError> {
        if !self.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(SpreadsheetError::SheetNotFoundError(self.name.to_owned(), sheet_name.to_owned()));
        }
        let range = self.workbook.worksheet_range(sheet_name)?;
        let (row_lower_bound, col_lower_bound) = range
            .start()
            .map(|(row, col)| (row as usize, col as usize))
            .unwrap_or((0, 0));

        let mut sheet = Sheet::new(sheet_name, col_lower_bound);
        for (offset, record) in range.rows().enumerate() {
            sheet.push(row_lower_bound + offset, record.iter().map(Cell::from).collect());
        }
        Ok(sheet)
    }
}
