use crate::database::identifier::sanitize;
use crate::database::identifier::sanitize_list;
use crate::database::schema::Column;

/// Represents a table to be created from a sheet.
#[derive(Clone, Debug)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Column definitions
    pub columns: Vec<Column>,
}

impl Table {
    /// Table name derived from a sheet name, with spaces removed.
    pub fn name_from_sheet(sheet_name: &str) -> String {
        sheet_name.replace(' ', "")
    }

    /// `CREATE TABLE IF NOT EXISTS` statement declaring every column as text.
    pub fn create_statement(&self) -> String {
        let definitions = self
            .columns
            .iter()
            .map(Column::definition)
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({})", sanitize(&self.name), definitions)
    }

    /// `INSERT` statement naming every column, with one placeholder per column.
    pub fn insert_statement(&self) -> String {
        let names = self.columns.iter().map(|column| column.name.as_str()).collect::<Vec<_>>();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            sanitize(&self.name),
            sanitize_list(&names),
            placeholders(names.len())
        )
    }
}

/// `?, ?, ...` with `count` placeholders.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
