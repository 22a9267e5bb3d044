//! CSV edge — typed client table in, problematic-clients report out.
//!
//! RULE: Only this module touches the CSV files. The classifier works
//! on loaded records and returns rows; this module does the I/O.
//!
//! The input schema is checked at load time: every column must parse
//! into the typed record, and the on-time count must stay within its
//! 0-12 range. Any malformed row aborts the run.

use crate::classifier::{ClientRecord, ProblematicRow};
use crate::error::{ReportError, ReportResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// UTF-8 byte-order mark. Spreadsheet tools use it to pick the
/// encoding when opening the report.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load the client table. Expects a header row with the columns
/// `client_id, client_name, annual_revenue, avg_days_to_pay,
/// last_12_payments_on_time`.
pub fn load_clients(path: &Path) -> ReportResult<Vec<ClientRecord>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ClientRecord = row?;
        if record.last_12_payments_on_time > 12 {
            return Err(ReportError::InvalidRecord {
                client_id: record.client_id,
                reason: format!(
                    "last_12_payments_on_time = {} exceeds 12",
                    record.last_12_payments_on_time
                ),
            });
        }
        records.push(record);
    }

    log::info!("report: loaded {} client records", records.len());
    Ok(records)
}

/// Write the problematic-clients report, BOM first so spreadsheet
/// imports read it as UTF-8.
pub fn write_problematic_report(path: &Path, rows: &[ProblematicRow]) -> ReportResult<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    log::info!("report: wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
