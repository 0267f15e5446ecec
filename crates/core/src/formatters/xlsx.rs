//! xlsx report output.
//!
//! One worksheet with the same header as the CSV table. `URL_ID` and `URL`
//! are string cells; every metric is a number cell.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::table::header;
use crate::Result;
use crate::report::Report;

/// Configuration for xlsx output
#[derive(Debug, Clone)]
pub struct XlsxConfig {
    /// Worksheet name
    pub sheet_name: String,
    /// Bold header row
    pub bold_header: bool,
}

impl Default for XlsxConfig {
    fn default() -> Self {
        Self { sheet_name: "Sheet1".to_string(), bold_header: true }
    }
}

fn fill_worksheet(report: &Report, worksheet: &mut Worksheet, config: &XlsxConfig) -> Result<()> {
    worksheet.set_name(&config.sheet_name)?;

    let header_format = if config.bold_header { Format::new().set_bold() } else { Format::new() };
    for (col, name) in header().into_iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (i, row) in report.rows().iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.url_id)?;
        worksheet.write_string(r, 1, &row.url)?;
        for (offset, value) in row.metrics.values().iter().enumerate() {
            worksheet.write_number(r, (offset + 2) as u16, value.as_f64())?;
        }
    }
    Ok(())
}

/// Renders `report` as xlsx bytes.
pub fn convert_to_xlsx(report: &Report, config: &XlsxConfig) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    fill_worksheet(report, workbook.add_worksheet(), config)?;
    Ok(workbook.save_to_buffer()?)
}

/// Writes `report` as an xlsx workbook at `path`.
pub fn write_xlsx(report: &Report, path: &Path, config: &XlsxConfig) -> Result<()> {
    let mut workbook = Workbook::new();
    fill_worksheet(report, workbook.add_worksheet(), config)?;
    workbook.save(path)?;
    Ok(())
}
