use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::sheet::Sheet;
use crate::spreadsheet::Spreadsheet;
use crate::spreadsheet::SpreadsheetError;

/// Workbook assembled in memory, sheet by sheet.
#[derive(Clone, Debug, Default)]
pub struct MemorySpreadsheet {
    name: String,
    sheets: Vec<Sheet>,
}

impl MemorySpreadsheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            sheets: Vec::new(),
        }
    }

    /// Adds a sheet whose rows start at A1.
    pub fn with_sheet(mut self, sheet_name: &str, rows: Vec<Vec<Cell>>) -> Self {
        let mut sheet = Sheet::new(sheet_name, 0);
        for (index, cells) in rows.into_iter().enumerate() {
            sheet.push(index, cells);
        }
        self.sheets.push(sheet);
        self
    }
}

impl Spreadsheet for MemorySpreadsheet {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.to_owned()).collect()
    }

    fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet, SpreadsheetError> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == sheet_name)
            .cloned()
            .ok_or_else(|| SpreadsheetError::SheetNotFoundError(self.name.to_owned(), sheet_name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheets_keep_insertion_order() {
        let spreadsheet = MemorySpreadsheet::new("school")
            .with_sheet("Subjects", vec![])
            .with_sheet("Faculties", vec![]);
        assert_eq!(spreadsheet.sheet_names(), vec!["Subjects", "Faculties"]);
        assert_eq!(spreadsheet.name(), "school");
    }

    #[test]
    fn read_sheet_returns_rows() {
        let mut spreadsheet = MemorySpreadsheet::new("school").with_sheet(
            "Subjects",
            vec![vec![Cell::from("Subject Code")], vec![Cell::from("MATH001")]],
        );
        let sheet = spreadsheet.read_sheet("Subjects").unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1].index, 1);
        assert_eq!(sheet.rows[1].cells, vec![Cell::from("MATH001")]);
    }

    #[test]
    fn read_unknown_sheet_fails() {
        let mut spreadsheet = MemorySpreadsheet::new("school");
        let error = spreadsheet.read_sheet("Rooms").unwrap_err();
        assert_eq!(error.to_string(), "Sheet 'Rooms' not found in 'school'");
    }
}
