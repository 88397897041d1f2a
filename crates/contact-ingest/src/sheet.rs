use contact_model::RawRow;

/// A fully buffered sheet: one header row plus data rows.
///
/// Every data row has exactly `headers.len()` cells; short source rows are
/// padded with empty strings and long ones truncated.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// View each data row as `(header, value)` pairs in column order.
    pub fn raw_rows(&self) -> Vec<RawRow> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Assemble a table from raw rows: first row is the header, empty rows are
/// dropped, data rows are sized to the header width.
pub(crate) fn table_from_rows(mut raw_rows: Vec<Vec<String>>) -> SheetTable {
    raw_rows.retain(|row| row.iter().any(|value| !value.trim().is_empty()));
    if raw_rows.is_empty() {
        return SheetTable::default();
    }
    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    SheetTable { headers, rows }
}
