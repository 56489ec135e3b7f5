//! Imports a workbook into a store file and prints what landed where.
//!
//! ```text
//! cargo run --example import_workbook -- ums.duckdb UMS_Data.xlsx [SHEET_PATTERN...]
//! ```
//!
//! Set `RUST_LOG=sheetbase=debug` to see the generated SQL.
use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use sheetbase::Database;
use sheetbase::ImportOptions;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (database_path, workbook_path, patterns) = match args.as_slice() {
        [database, workbook, patterns @ ..] => (database, workbook, patterns),
        _ => bail!("usage: import_workbook <DATABASE> <WORKBOOK> [SHEET_PATTERN...]"),
    };

    let mut options = ImportOptions::default();
    if !patterns.is_empty() {
        let patterns = patterns.iter().map(String::as_str).collect::<Vec<_>>();
        options = options.with_sheets(&patterns).context("Invalid sheet pattern")?;
    }

    let database = Database::open(database_path)?;
    let report = database.import_workbook_with(workbook_path, &options)?;

    println!("{}: {} rows", report.name, report.rows());
    for sheet in &report.sheets {
        println!("  {sheet}");
    }

    for table in database.try_list_tables()? {
        let columns = database.try_list_columns(&table)?;
        println!("{table} ({})", columns.join(", "));
    }

    if !report.is_success() {
        bail!("Some sheets failed to import");
    }
    Ok(())
}
