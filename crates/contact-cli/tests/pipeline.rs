use std::fs;

use contact_cli::pipeline::{ExportFormat, export, ingest, map_records};
use contact_map::{MappingProfile, RowMapper};

#[test]
fn csv_in_to_formatted_csv_out() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("contacts.csv");
    fs::write(
        &input,
        "Full Name,Email Addr,Home Phone,Date of Birth,Stage,Referral Code\n\
         Jane Doe,jane@example.com,555-0100,1990-05-14,Client,XY-9\n\
         Madonna,m@example.com,555-0101,not a date,hot lead,\n",
    )
    .unwrap();

    let table = ingest(&input).unwrap();
    assert_eq!(table.rows.len(), 2);

    let mapper = RowMapper::new(MappingProfile::standard());
    let (plan, records) = map_records(&mapper, &table);
    assert_eq!(records.len(), 2);
    assert_eq!(plan.passthrough_columns, vec!["Referral Code".to_string()]);

    assert_eq!(records[0].first_name, "Jane");
    assert_eq!(records[0].last_name, "Doe");
    assert_eq!(records[0].date_of_birth, "1990-05-14");
    assert_eq!(records[0].borrower_stage.as_str(), "Client");
    assert_eq!(records[1].first_name, "Madonna");
    assert_eq!(records[1].last_name, "");
    assert_eq!(records[1].date_of_birth, "not a date");
    assert_eq!(records[1].borrower_stage.as_str(), "Prospect");

    let output = dir.path().join("formatted_contacts.csv");
    let written = export(&records, &output, &[ExportFormat::Csv]).unwrap();
    assert_eq!(written, vec![output.clone()]);

    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("First Name,Last Name,Email,"));
    assert!(header.ends_with(",Referral Code"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn ingest_failure_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    assert!(ingest(&missing).is_err());
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}
