use std::io::Write;

use contact_ingest::read_sheet;

#[test]
fn dispatches_csv_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"Full Name,Home Phone Number\nJane Doe,555-0100\nMadonna,555-0101\n")
        .unwrap();

    let table = read_sheet(file.path()).unwrap();
    assert_eq!(table.headers, vec!["Full Name", "Home Phone Number"]);
    assert_eq!(table.rows.len(), 2);

    let rows = table.raw_rows();
    assert_eq!(rows[0].get("Full Name"), Some("Jane Doe"));
    assert_eq!(rows[1].get("Home Phone Number"), Some("555-0101"));
}

#[test]
fn rejects_unknown_extension() {
    let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    let error = read_sheet(file.path()).unwrap_err();
    assert!(error.to_string().contains("unsupported spreadsheet format"));
}
