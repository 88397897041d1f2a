use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use crate::sheet::{SheetTable, table_from_rows};

/// Read a CSV file into a [`SheetTable`].
///
/// The reader is flexible about ragged records; sizing to the header width
/// happens during table assembly.
pub fn read_csv_table(path: &Path) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        raw_rows.push(record.iter().map(str::to_string).collect());
    }
    let table = table_from_rows(raw_rows);
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "csv table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_first_row_as_header() {
        let file = write_fixture("Name,Email\nJane Doe,jane@example.com\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["Name", "Email"]);
        assert_eq!(table.rows, vec![vec!["Jane Doe", "jane@example.com"]]);
    }

    #[test]
    fn skips_blank_rows_and_strips_bom() {
        let file = write_fixture("\u{feff}Name,Phone\n,,\nBob,555-0100\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["Name", "Phone"]);
        assert_eq!(table.rows, vec![vec!["Bob", "555-0100"]]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = read_csv_table(Path::new("/nonexistent/contacts.csv"));
        assert!(result.is_err());
    }
}
