use std::collections::BTreeSet;

use contact_model::{ContactRecord, FIELD_HEADERS};

/// Full export header row: the fixed schema headers followed by the
/// sorted union of extension-area columns across all records.
pub fn output_headers(records: &[ContactRecord]) -> Vec<String> {
    let mut extras: BTreeSet<&str> = BTreeSet::new();
    for record in records {
        extras.extend(record.extras.keys().map(String::as_str));
    }
    FIELD_HEADERS
        .iter()
        .copied()
        .chain(extras)
        .map(str::to_string)
        .collect()
}

/// One record's cells in header order. `headers` must come from
/// [`output_headers`] over the same record set; extension columns a record
/// does not carry render empty.
pub fn record_values(record: &ContactRecord, headers: &[String]) -> Vec<String> {
    let fixed = record.field_values();
    let mut values: Vec<String> = fixed.iter().map(|value| (*value).to_string()).collect();
    for header in &headers[fixed.len()..] {
        let value = record.extras.get(header).cloned().unwrap_or_default();
        values.push(value);
    }
    values
}
