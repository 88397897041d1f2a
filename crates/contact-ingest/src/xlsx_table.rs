use std::path::Path;

use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveTime;
use tracing::debug;

use crate::sheet::{SheetTable, table_from_rows};

/// Read the first worksheet of an Excel-family file into a [`SheetTable`].
pub fn read_xlsx_table(path: &Path) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("open workbook: {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("no worksheet found: {}", path.display()))?
        .with_context(|| format!("read worksheet: {}", path.display()))?;

    let raw_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(render_cell).collect())
        .collect();
    let table = table_from_rows(raw_rows);
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "worksheet loaded"
    );
    Ok(table)
}

/// Render one cell as text the way it would read in the sheet.
///
/// Date cells become ISO dates so the downstream date normalizer sees them
/// already in target form; numbers drop a spurious `.0`.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if datetime.time() == NaiveTime::MIN => {
                datetime.format("%Y-%m-%d").to_string()
            }
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            // Out-of-range serial: keep the raw number rather than dropping it.
            None => format!("{}", dt.as_f64()),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_scalar_cells_as_sheet_text() {
        assert_eq!(render_cell(&Data::Empty), "");
        assert_eq!(render_cell(&Data::String("Jane".to_string())), "Jane");
        assert_eq!(render_cell(&Data::Float(42.0)), "42");
        assert_eq!(render_cell(&Data::Float(3.5)), "3.5");
        assert_eq!(render_cell(&Data::Int(7)), "7");
        assert_eq!(render_cell(&Data::Bool(true)), "TRUE");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = read_xlsx_table(Path::new("/nonexistent/contacts.xlsx"));
        assert!(result.is_err());
    }
}
