//! Pipeline stages for the convert command: ingest, map, enhance, export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use contact_enhance::{EnhanceConfig, enhance_contacts};
use contact_ingest::{SheetTable, read_sheet};
use contact_map::{MappingPlan, RowMapper};
use contact_model::ContactRecord;
use contact_output::{write_contacts_csv, write_contacts_xlsx};

use crate::logging::redact_value;
use crate::types::EnhancementStatus;

/// Which export files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

/// Read the input spreadsheet, failing with context and no partial state.
pub fn ingest(path: &Path) -> Result<SheetTable> {
    let table = read_sheet(path)?;
    if table.headers.is_empty() {
        bail!("no header row found: {}", path.display());
    }
    Ok(table)
}

/// Map every data row to a contact record, 1:1.
pub fn map_records(mapper: &RowMapper, table: &SheetTable) -> (MappingPlan, Vec<ContactRecord>) {
    let plan = mapper.plan(&table.headers);
    let rows = table.raw_rows();
    let records = mapper.map_rows(&rows);
    for (idx, record) in records.iter().enumerate() {
        debug!(
            row = idx + 1,
            first_name = redact_value(&record.first_name),
            email = redact_value(&record.email),
            "mapped row"
        );
    }
    (plan, records)
}

/// Run the optional enhancement pass. Failures never surface here; they
/// become [`EnhancementStatus::FellBack`].
pub fn enhance(
    config: &EnhanceConfig,
    records: &[ContactRecord],
) -> (Vec<ContactRecord>, EnhancementStatus) {
    let outcome = enhance_contacts(config, records);
    let status = if outcome.applied {
        EnhancementStatus::Applied
    } else {
        EnhancementStatus::FellBack
    };
    (outcome.records, status)
}

/// Write the requested export files next to `csv_path` and return the
/// paths actually written.
pub fn export(
    records: &[ContactRecord],
    csv_path: &Path,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    let mut outputs = Vec::new();
    for format in formats {
        match format {
            ExportFormat::Csv => {
                write_contacts_csv(csv_path, records)
                    .with_context(|| format!("export csv: {}", csv_path.display()))?;
                outputs.push(csv_path.to_path_buf());
            }
            ExportFormat::Xlsx => {
                let xlsx_path = csv_path.with_extension("xlsx");
                write_contacts_xlsx(&xlsx_path, records)
                    .with_context(|| format!("export xlsx: {}", xlsx_path.display()))?;
                outputs.push(xlsx_path);
            }
        }
    }
    for path in &outputs {
        info!(path = %path.display(), "output written");
    }
    Ok(outputs)
}
