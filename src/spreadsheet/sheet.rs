use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::reference::index_to_reference;

/// One physical row of a sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Row index in the worksheet (0-based)
    pub index: usize,
    /// Cells from the sheet's first used column onwards
    pub cells: Vec<Cell>,
}

impl Row {
    /// Returns true if no cell in the row holds a value.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Returns the cell at `position`, or `Cell::Empty` past the end of the row.
    pub fn get(&self, position: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.cells.get(position).unwrap_or(&EMPTY)
    }

    /// Number of leading positions up to and including the last non-empty cell.
    pub fn width(&self) -> usize {
        self.cells
            .iter()
            .rposition(|cell| !cell.is_empty())
            .map(|position| position + 1)
            .unwrap_or(0)
    }
}

/// A worksheet read from a spreadsheet, in row order.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    /// Sheet name as shown in the workbook
    pub name: String,
    /// Column index of the first cell in every row (0-based)
    pub col_lower_bound: usize,
    /// All rows of the sheet
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(name: &str, col_lower_bound: usize) -> Self {
        Self {
            name: name.to_owned(),
            col_lower_bound,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, index: usize, cells: Vec<Cell>) {
        self.rows.push(Row { index, cells });
    }

    /// Excel-style reference of the cell at `position` within `row`.
    pub fn reference(&self, row: &Row, position: usize) -> String {
        index_to_reference(row.index, self.col_lower_bound + position)
    }
}
