//! CSV report output.
//!
//! The header is always `URL_ID`, `URL` and the thirteen metric columns, even
//! when the report is empty. Counts are written as integers and ratios as
//! shortest round-trip decimals.

use std::io::Write;

use crate::metrics::FIELD_NAMES;
use crate::report::{Report, ReportRow};
use crate::{LexisError, Result};

/// Configuration for CSV output
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Column headers in output order.
pub fn header() -> Vec<&'static str> {
    let mut columns = vec!["URL_ID", "URL"];
    columns.extend(FIELD_NAMES);
    columns
}

fn row_record(row: &ReportRow) -> Vec<String> {
    let mut record = vec![row.url_id.clone(), row.url.clone()];
    record.extend(row.metrics.values().iter().map(|v| v.to_string()));
    record
}

/// Writes `report` as CSV to `writer`.
pub fn write_table<W: Write>(report: &Report, writer: W, config: &TableConfig) -> Result<()> {
    let mut out = csv::WriterBuilder::new().delimiter(config.delimiter).from_writer(writer);

    out.write_record(header())?;
    for row in report.rows() {
        out.write_record(row_record(row))?;
    }
    out.flush().map_err(LexisError::from)
}

/// Renders `report` as a CSV string.
pub fn convert_to_table(report: &Report, config: &TableConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_table(report, &mut buf, config)?;
    String::from_utf8(buf).map_err(|e| LexisError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
