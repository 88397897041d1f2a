use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use contact_model::ContactRecord;

use crate::SHEET_NAME;
use crate::grid::{output_headers, record_values};

/// Write the record set as an XLSX workbook with a single named sheet.
pub fn write_contacts_xlsx(path: &Path, records: &[ContactRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .context("set worksheet name")?;

    let headers = output_headers(records);
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header)
            .context("write header cell")?;
    }
    for (row_idx, record) in records.iter().enumerate() {
        let values = record_values(record, &headers);
        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32 + 1, col as u16, value)
                .context("write data cell")?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("write xlsx: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_workbook_file() {
        let record = ContactRecord {
            first_name: "Jane".to_string(),
            ..ContactRecord::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formatted_contacts.xlsx");
        write_contacts_xlsx(&path, &[record]).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
