use std::fmt::Display;

/// What happened to one sheet during an import.
#[derive(Clone, Debug, PartialEq)]
pub enum SheetOutcome {
    /// Table created (or reused) and every data row inserted
    Imported { columns: Vec<String>, rows: usize },
    /// Sheet has no rows; no table was created
    SkippedEmpty,
    /// Processing stopped; `rows` were inserted before the failure and stay committed
    Failed { reason: String, rows: usize },
}

/// Outcome of one sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetReport {
    /// Sheet name as shown in the workbook
    pub sheet_name: String,
    /// Target table name
    pub table_name: String,
    pub outcome: SheetOutcome,
}

/// Per-sheet outcomes of an import, in workbook order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportReport {
    /// Workbook name
    pub name: String,
    pub sheets: Vec<SheetReport>,
}

impl ImportReport {
    /// Returns the report of the named sheet.
    pub fn sheet(&self, sheet_name: &str) -> Option<&SheetReport> {
        self.sheets.iter().find(|sheet| sheet.sheet_name == sheet_name)
    }

    /// True if no sheet failed.
    pub fn is_success(&self) -> bool {
        !self
            .sheets
            .iter()
            .any(|sheet| matches!(sheet.outcome, SheetOutcome::Failed { .. }))
    }

    /// Total number of rows inserted across all sheets.
    pub fn rows(&self) -> usize {
        self.sheets
            .iter()
            .map(|sheet| match &sheet.outcome {
                SheetOutcome::Imported { rows, .. } | SheetOutcome::Failed { rows, .. } => *rows,
                SheetOutcome::SkippedEmpty => 0,
            })
            .sum()
    }
}

impl Display for SheetReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            SheetOutcome::Imported { columns, rows } => write!(
                f,
                "'{}' -> {}: {} rows, columns [{}]",
                self.sheet_name,
                self.table_name,
                rows,
                columns.join(", ")
            ),
            SheetOutcome::SkippedEmpty => write!(f, "'{}': skipped empty sheet", self.sheet_name),
            SheetOutcome::Failed { reason, rows } => write!(
                f,
                "'{}' -> {}: failed after {} rows: {}",
                self.sheet_name, self.table_name, rows, reason
            ),
        }
    }
}
