pub mod csv_table;
pub mod sheet;
pub mod xlsx_table;

pub use csv_table::read_csv_table;
pub use sheet::SheetTable;
pub use xlsx_table::read_xlsx_table;

use std::path::Path;

use anyhow::{Result, bail};

/// Read the first sheet of a spreadsheet file, dispatching on extension.
///
/// The first row is treated as the header row. Reading either succeeds
/// with the full table buffered or fails with no partial result.
pub fn read_sheet(path: &Path) -> Result<SheetTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => read_csv_table(path),
        "xlsx" | "xls" | "xlsb" | "ods" => read_xlsx_table(path),
        other => bail!("unsupported spreadsheet format: .{other}"),
    }
}
