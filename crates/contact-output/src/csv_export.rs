use std::path::Path;

use anyhow::{Context, Result};

use contact_model::ContactRecord;

use crate::grid::{output_headers, record_values};

/// Write the record set as a single CSV file, one line per record.
pub fn write_contacts_csv(path: &Path, records: &[ContactRecord]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("write csv: {}", path.display()))?;
    let headers = output_headers(records);
    writer
        .write_record(&headers)
        .with_context(|| format!("write csv header: {}", path.display()))?;
    for record in records {
        writer
            .write_record(record_values(record, &headers))
            .with_context(|| format!("write csv record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_fixed_columns_then_extras() {
        let mut record = ContactRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            date_of_birth: "1990-05-14".to_string(),
            ..ContactRecord::default()
        };
        record
            .extras
            .insert("Referral Code".to_string(), "XY-9".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formatted_contacts.csv");
        write_contacts_csv(&path, &[record]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!(content.trim_end(), @r"
        First Name,Last Name,Email,Phone,Address,City,Province,Postal Code,Date of Birth,Borrower Stage,Partner Type,Lead Source,Campaign,Referral Code
        Jane,Doe,jane@example.com,,,,,,1990-05-14,Prospect,,,,XY-9
        ");
    }

    #[test]
    fn round_trips_through_a_csv_reader() {
        let records = vec![
            ContactRecord {
                first_name: "Ada".to_string(),
                ..ContactRecord::default()
            },
            ContactRecord {
                first_name: "Bob".to_string(),
                ..ContactRecord::default()
            },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_contacts_csv(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Ada");
        assert_eq!(&rows[1][0], "Bob");
    }
}
