use glob::Pattern;
use std::collections::HashSet;

/// Criteria controlling which sheets and rows an import takes.
#[derive(Clone, Debug)]
pub struct ImportOptions {
    /// Sheet name patterns; only matching sheets are imported (default: all).
    pub sheet_name_patterns: Option<Vec<Pattern>>,

    /// Cell texts stored as NULL (default: none).
    pub nulls: HashSet<String>,

    /// Skip rows where all cells are empty (default: true).
    pub skip_empty_rows: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            sheet_name_patterns: None,
            nulls: HashSet::new(),
            skip_empty_rows: true,
        }
    }
}

impl ImportOptions {
    /// Restricts the import to sheets matching any of the glob `patterns`.
    pub fn with_sheets(mut self, patterns: &[&str]) -> Result<Self, glob::PatternError> {
        let patterns = patterns
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        self.sheet_name_patterns = Some(patterns);
        Ok(self)
    }

    /// Treats each of `literals` as NULL.
    pub fn with_nulls(mut self, literals: &[&str]) -> Self {
        self.nulls = literals.iter().map(|literal| literal.to_string()).collect();
        self
    }

    /// Checks if a sheet name matches the criteria patterns.
    /// Returns true if no patterns are specified or if name matches any pattern.
    pub fn accept(&self, sheet_name: &str) -> bool {
        if let Some(patterns) = &self.sheet_name_patterns {
            patterns.iter().any(|pattern| pattern.matches(sheet_name))
        } else {
            true
        }
    }

    /// Applies the null literals to a cell's text.
    pub(crate) fn to_value(&self, text: Option<String>) -> Option<String> {
        text.filter(|text| !self.nulls.contains(text))
    }
}
