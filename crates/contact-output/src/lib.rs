//! Export of formatted contact records.
//!
//! Two writers over the same grid: CSV (the default download) and XLSX
//! with a single fixed-name sheet. Column order is the record's field
//! declaration order, then the sorted union of extension-area columns.

mod csv_export;
mod grid;
mod xlsx_export;

pub use csv_export::write_contacts_csv;
pub use grid::{output_headers, record_values};
pub use xlsx_export::write_contacts_xlsx;

/// Default download filename for the CSV export.
pub const OUTPUT_FILE_NAME: &str = "formatted_contacts.csv";

/// Sheet name used by the XLSX export.
pub const SHEET_NAME: &str = "Formatted Data";
